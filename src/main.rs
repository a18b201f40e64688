use clap::Parser;
use std::io::{self, IsTerminal};
use userdir::cli::{run_browse, run_cities, run_list, Cli, Commands};
use userdir::logging::{self, LogTarget};
use userdir::{source, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.source.overrides())?;

    let interactive = matches!(cli.command, None | Some(Commands::Browse))
        && io::stdin().is_terminal()
        && io::stdout().is_terminal();

    // The browser owns the terminal, so its log goes to a file
    let target = if interactive {
        LogTarget::File(config.effective_log_file()?)
    } else {
        LogTarget::Stderr
    };
    let _log_guard = logging::init(&target)?;

    let source = source::open(&config.source)?;

    match cli.command {
        None | Some(Commands::Browse) => {
            if interactive {
                run_browse(source.as_ref(), config.debounce)?;
            } else {
                // Not a TTY - fall back to a plain listing
                run_list(source.as_ref(), None, None, false)?;
            }
        }
        Some(Commands::List(args)) => {
            run_list(
                source.as_ref(),
                args.name.as_deref(),
                args.city.as_deref(),
                args.highlight,
            )?;
        }
        Some(Commands::Cities) => {
            run_cities(source.as_ref())?;
        }
    }

    Ok(())
}
