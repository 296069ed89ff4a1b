use clap::Parser;
use std::path::PathBuf;

use huespot::export::{CsvExporter, ResultTable, TabularExporter, export_all};
use huespot::{Annotator, DetectionPipeline, ImageSource, PipelineConfig, distance};

const DEFAULT_IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/7/73/Pale_Blue_Dot.png";

#[derive(Parser)]
#[command(name = "huespot")]
#[command(about = "Locate color-keyed objects in an image and measure them")]
struct Cli {
    /// Path to the input image; downloaded if missing
    #[arg(value_name = "IMAGE", default_value = "pale_blue_dot.png")]
    image_path: PathBuf,

    /// URL used to fetch the image when the local file is absent
    #[arg(long, default_value = DEFAULT_IMAGE_URL)]
    url: String,

    /// JSON file with detection targets and drawing style
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Where to write the annotated copy of the image
    #[arg(long, value_name = "FILE", default_value = "objects_found.png")]
    annotated_out: PathBuf,

    /// Where to write the CSV table
    #[arg(long, value_name = "FILE", default_value = "object_coordinates.csv")]
    csv_out: PathBuf,

    /// Where to write the spreadsheet (requires the xlsx build feature)
    #[arg(long, value_name = "FILE", default_value = "object_coordinates.xlsx")]
    xlsx_out: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path)?,
        None => PipelineConfig::builtin(),
    };

    // Exporter availability is settled here, once; the xlsx capability is
    // a build-time fact, not an error to catch later.
    let mut exporters: Vec<Box<dyn TabularExporter>> =
        vec![Box::new(CsvExporter::new(&args.csv_out))];
    #[cfg(feature = "xlsx")]
    exporters.push(Box::new(huespot::XlsxExporter::new(&args.xlsx_out)));
    #[cfg(not(feature = "xlsx"))]
    log::warn!(
        "built without the xlsx feature; {} will not be written",
        args.xlsx_out.display()
    );

    let source = ImageSource::new(&args.image_path, Some(args.url.clone()));
    let img = source.load()?.to_rgb8();
    log::info!(
        "loaded {} ({}x{})",
        args.image_path.display(),
        img.width(),
        img.height()
    );

    let pipeline = DetectionPipeline::new(config.targets.clone());
    let detections = pipeline.detect(&img);

    for detection in &detections {
        println!(
            "{} detected at X={:.0}, Y={:.0} (radius {:.1})",
            detection.target, detection.center.0, detection.center.1, detection.radius
        );
    }

    let distances: Vec<_> = distance::between_first_pair(&detections).into_iter().collect();
    for record in &distances {
        println!(
            "Euclidean distance between {} and {}: {:.2} pixels",
            record.from, record.to, record.distance
        );
    }

    let annotator = Annotator::new(config.style.clone())?;
    let annotated = annotator.render(&img, pipeline.targets(), &detections, &distances);
    annotated.save(&args.annotated_out)?;
    println!("Annotated image saved to {}", args.annotated_out.display());

    let table = ResultTable::from_results(&detections, &distances);
    let written = export_all(&table, &exporters);
    println!("Wrote {written} of {} table formats", exporters.len());

    Ok(())
}
