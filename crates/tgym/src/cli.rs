use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tgym_i18n::{DEFAULT_LOCALE, LocaleSource, Localizer, TextProvider};
use tgym_runtime::{CancellationSource, Program, Renderer, SignalGuard, TerminalRenderer};

use crate::config::GymConfig;
use crate::error::Result;
use crate::exercise::{ExerciseKind, Session};
use crate::gym::Gym;
use crate::logging;
use crate::screen;

#[derive(Debug, Parser)]
#[command(
    name = "tgym",
    about = "Spring-animated exercises in the terminal",
    version,
    disable_help_flag = true
)]
pub struct Cli {
    /// Interface language (en, zh).
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Print the localized usage text and exit.
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// Start this exercise without showing the menu.
    #[arg(long, value_enum)]
    pub exercise: Option<ExerciseKind>,

    /// Stop after this many reps or breaths.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub reps: Option<u32>,

    /// Skip the preparation countdown.
    #[arg(long)]
    pub no_countdown: bool,

    /// Read `<DIR>/<lang>.json` instead of the built-in texts.
    #[arg(long, value_name = "DIR")]
    pub locales_dir: Option<PathBuf>,

    /// TOML settings file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    fn locale_source(&self) -> LocaleSource {
        self.locales_dir
            .clone()
            .map_or(LocaleSource::Embedded, LocaleSource::Directory)
    }
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    logging::init();
    let locales = cli.locale_source();

    if cli.help {
        let texts = Localizer::resolve(&locales, cli.lang.as_deref().unwrap_or(DEFAULT_LOCALE));
        println!("{}", texts.lookup("language_help"));
        return Ok(());
    }

    let settings = GymConfig::load(cli.config.as_deref())?;
    let lang = cli
        .lang
        .as_deref()
        .or(settings.lang.as_deref())
        .unwrap_or(DEFAULT_LOCALE);
    let texts = Localizer::resolve(&locales, lang);

    let mut renderer = TerminalRenderer::new(io::stdout());
    let kind = match cli.exercise.or(settings.exercise) {
        Some(kind) => kind,
        None => {
            renderer.clear()?;
            screen::select_exercise(&texts, &mut io::stdin().lock(), renderer.get_mut())?
        }
    };
    tracing::info!(?kind, language = texts.language(), "exercise selected");

    let source = CancellationSource::new();
    let token = source.token();
    let _signals = SignalGuard::install(source)?;
    renderer.hide_cursor()?;

    if !cli.no_countdown && !screen::countdown(&texts, &mut renderer, &token, screen::COUNTDOWN_STEP)? {
        renderer.clear()?;
        tracing::info!(stop = ?token.reason(), "cancelled during countdown");
        return Ok(());
    }

    let animation = &settings.animation;
    let session = Session::new(kind, animation, cli.reps.or(settings.reps));
    let mut program = Program::new(Gym::new(session, texts), &mut renderer, animation.frame_period());
    let summary = program.run(&token)?;
    tracing::info!(ticks = summary.ticks, reason = ?summary.reason, "session finished");
    Ok(())
}
