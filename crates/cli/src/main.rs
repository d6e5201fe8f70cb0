use std::path::PathBuf;
use std::process;

use clap::Parser;

use retalk_core::pipeline::compose_comparison_use_case::ComposeComparisonUseCase;
use retalk_core::pipeline::inputs::resolve_input;
use retalk_core::pipeline::pipeline_logger::{PipelineLogger, StdoutPipelineLogger};
use retalk_core::pipeline::run_lipsync_use_case::RunLipsyncUseCase;
use retalk_core::reenact::infrastructure::reenactor_command::ReenactorCommand;
use retalk_core::shared::run_layout::RunLayout;
use retalk_core::video::infrastructure::ffmpeg_cli_muxer::FfmpegCliMuxer;
use retalk_core::video::infrastructure::ffmpeg_reader::FfmpegReader;
use retalk_core::video::infrastructure::ffmpeg_writer::FfmpegWriter;

/// Lip-sync a face video to an audio track and build a side-by-side
/// comparison against the original.
#[derive(Parser)]
#[command(name = "retalk")]
struct Cli {
    /// Face (source) video that drives the reenactment.
    face_video: PathBuf,

    /// Audio track to lip-sync against and mux into the result.
    audio: PathBuf,

    /// Root directory for intermediate and final artifacts.
    #[arg(long, default_value = ".")]
    work_dir: PathBuf,

    /// Compose against an existing generated video instead of running
    /// inference.
    #[arg(long)]
    generated: Option<PathBuf>,

    /// Directory containing the reenactment tool checkout.
    #[arg(long, default_value = "video-retalking")]
    tool_dir: PathBuf,

    /// Python interpreter used to run the reenactment tool.
    #[arg(long, default_value = "python3")]
    python: PathBuf,

    /// ffmpeg binary used for audio muxing.
    #[arg(long, default_value = "ffmpeg")]
    ffmpeg: PathBuf,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let layout = RunLayout::new(&cli.work_dir);
    let logger: Box<dyn PipelineLogger> = Box::new(StdoutPipelineLogger::default());
    let mut compose = ComposeComparisonUseCase::new(
        Box::new(FfmpegReader::new()),
        Box::new(FfmpegReader::new()),
        Box::new(FfmpegWriter::new()),
        Box::new(FfmpegCliMuxer::new().with_binary(&cli.ffmpeg)),
        Some(logger),
    );

    if let Some(generated) = &cli.generated {
        let face = resolve_input(&cli.face_video)?;
        let audio = resolve_input(&cli.audio)?;
        let generated = resolve_input(generated)?;
        let output = layout.comparison_video();
        compose.execute(
            &face,
            &generated,
            &audio,
            &layout.concat_scratch(),
            &output,
        )?;
        log::info!("comparison video written to {}", output.display());
    } else {
        let reenactor = ReenactorCommand::new(&cli.tool_dir).with_python(&cli.python);
        let mut lipsync = RunLipsyncUseCase::new(Box::new(reenactor), compose);
        let output = lipsync.execute(&cli.face_video, &cli.audio, &layout)?;
        log::info!("final video available at {}", output.display());
    }

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.generated.is_none() && !cli.tool_dir.is_dir() {
        return Err(format!(
            "Reenactment tool directory not found: {} (pass --generated to skip inference)",
            cli.tool_dir.display()
        )
        .into());
    }
    Ok(())
}
