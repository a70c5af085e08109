use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::context::ExecutionContext;
use crate::handlers::list::ListOptions;
use crate::logging;
use anyhow::{Result, bail};
use beanshelf_runtime::SortDirection;
use is_terminal::IsTerminal;
use std::future::Future;
use std::io;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::new(&cli)?;
    let command = cli.command.unwrap_or(Commands::Browse {
        route: "/".to_string(),
    });

    let color = io::stdout().is_terminal();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Browse { route } => {
            if !color {
                bail!("browse needs an interactive terminal; use `beanshelf list` for scripted output");
            }
            drop(out);
            logging::init_file(cli.log_level, ctx.data_dir())?;
            let fetcher = ctx.fetcher()?;
            block_on(handlers::browse::handle(fetcher, &route))??
        }

        Commands::List {
            search,
            sort,
            desc,
            format,
        } => {
            logging::init_stderr(cli.log_level);
            let fetcher = ctx.fetcher()?;
            let options = ListOptions {
                search,
                sort: sort.into(),
                direction: if desc {
                    SortDirection::Desc
                } else {
                    SortDirection::Asc
                },
                format,
                color,
            };
            block_on(handlers::list::handle(&fetcher, options, &mut out))??
        }

        Commands::Gallery { buckets, format } => {
            logging::init_stderr(cli.log_level);
            let fetcher = ctx.fetcher()?;
            block_on(handlers::gallery::handle(
                &fetcher, buckets, format, color, &mut out,
            ))??
        }

        Commands::Show { id, format } => {
            logging::init_stderr(cli.log_level);
            let fetcher = ctx.fetcher()?;
            block_on(handlers::show::handle(&fetcher, &id, format, color, &mut out))??
        }

        Commands::Config { command } => {
            logging::init_stderr(cli.log_level);
            match command {
                ConfigCommand::Init { force } => handlers::config::init(&ctx, force, &mut out)?,
                ConfigCommand::Show => handlers::config::show(&ctx, &mut out)?,
            }
        }
    }

    Ok(())
}

fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}
