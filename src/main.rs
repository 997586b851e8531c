use clap::{CommandFactory, Parser, error::ErrorKind};

use rom_thumbnails::{
    cli::Cli, command::render_command, config::Config, plan::build_plan, progress, vprintln,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match Config::try_from(cli) {
        Ok(config) => config,
        Err(err) => Cli::command()
            .error(ErrorKind::ValueValidation, format!("{err:#}"))
            .exit(),
    };
    let verbosity = config.verbosity();

    let plan = build_plan(&config)?;

    for diagnostic in &plan.diagnostics {
        vprintln!(verbosity, diagnostic.level(), "Warning: {}", diagnostic);
    }

    if config.print_plan {
        let serialized = serde_json::to_string_pretty(&plan)?;
        println!("{}", serialized);
        return Ok(());
    }

    if plan.jobs.is_empty() {
        vprintln!(verbosity, 1, "No matching images found for ROMs.");
        return Ok(());
    }

    vprintln!(verbosity, 1, "Found {} images to download:", plan.jobs.len());
    vprintln!(
        verbosity,
        2,
        "{} images already present were skipped",
        plan.summary.already_present
    );

    let bar = progress::command_bar(plan.jobs.len(), verbosity);
    for job in &plan.jobs {
        bar.suspend(|| println!("{}", render_command(job)));
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(())
}
