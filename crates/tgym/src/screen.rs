//! Screen composition: the workout frame, the selection menu, the countdown
//! and the farewell.
//!
//! Everything here turns localized text plus exercise state into plain
//! lines; clearing and writing is left to a [`Renderer`].

use std::io::{self, BufRead, Write};

use tgym_i18n::TextProvider;
use tgym_runtime::{CancellationToken, Renderer};
use web_time::Duration;

use crate::error::{GymError, Result};
use crate::exercise::{Exercise, ExerciseKind, Session};

/// Width of the banner and tip rules.
pub const WIDTH: usize = 60;

/// Indent of the "watch" heading and the counter line.
const COLUMN: usize = 25;

/// Time each countdown number stays on screen.
pub const COUNTDOWN_STEP: Duration = Duration::from_secs(1);

fn indent(n: usize, text: &str) -> String {
    format!("{}{text}", " ".repeat(n))
}

fn rule(c: char) -> String {
    c.to_string().repeat(WIDTH)
}

fn banner(title: &str, title_indent: usize, subtitle: &str, subtitle_indent: usize) -> Vec<String> {
    vec![
        String::new(),
        rule('='),
        indent(title_indent, title),
        indent(subtitle_indent, subtitle),
        rule('='),
    ]
}

fn welcome(texts: &dyn TextProvider) -> Vec<String> {
    banner(
        texts.lookup("welcome_title"),
        17,
        texts.lookup("welcome_subtitle"),
        20,
    )
}

/// `text` centred in [`WIDTH`] columns, counting chars.
fn centred(text: &str) -> String {
    indent(WIDTH.saturating_sub(text.chars().count()) / 2, text)
}

/// One full frame of the running exercise.
#[must_use]
pub fn workout(texts: &dyn TextProvider, session: &Session) -> Vec<String> {
    let mut lines = banner(texts.lookup("title"), 20, texts.lookup("subtitle"), 14);
    lines.push(String::new());

    lines.push(centred(session.instructions(texts)));
    lines.push(String::new());

    lines.push(String::new());
    lines.push(indent(COLUMN, texts.lookup("watch_follow")));
    lines.push(String::new());

    lines.extend(session.render(texts));

    lines.push(String::new());
    lines.push(String::new());
    lines.push(indent(COLUMN, &session.counter(texts)));

    lines.push(String::new());
    lines.push(rule('-'));
    lines.push(texts.lookup("tips_header").to_string());
    lines.extend(session.tips(texts));
    lines.push(rule('-'));
    lines
}

/// Lines shown once after the session ends.
#[must_use]
pub fn farewell(texts: &dyn TextProvider, session: &Session) -> Vec<String> {
    vec![
        String::new(),
        session.summary(texts),
        texts.lookup("keep_work").to_string(),
        String::new(),
    ]
}

/// Print the exercise menu and read a choice.
///
/// Invalid input re-prompts; end of input is [`GymError::NoSelection`].
pub fn select_exercise<R, W>(texts: &dyn TextProvider, input: &mut R, out: &mut W) -> Result<ExerciseKind>
where
    R: BufRead,
    W: Write,
{
    for line in welcome(texts) {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", texts.lookup("exercise_selection"))?;
    writeln!(out, "{}", texts.lookup("exercise_buttock"))?;
    writeln!(out, "{}", texts.lookup("exercise_meditation"))?;
    write!(out, "\n{}", texts.lookup("enter_choice"))?;
    out.flush()?;

    let mut buf = String::new();
    loop {
        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            return Err(GymError::NoSelection);
        }
        let choice = buf.trim().parse::<u32>().ok().and_then(ExerciseKind::from_choice);
        if let Some(kind) = choice {
            return Ok(kind);
        }
        tracing::debug!(input = buf.trim(), "invalid menu choice");
        write!(
            out,
            "{}\n{}",
            texts.lookup("invalid_choice"),
            texts.lookup("enter_choice")
        )?;
        out.flush()?;
    }
}

/// Show the 3-2-1 preparation countdown.
///
/// Returns `false` if cancelled part-way.
pub fn countdown<R: Renderer>(
    texts: &dyn TextProvider,
    renderer: &mut R,
    token: &CancellationToken,
    step: Duration,
) -> io::Result<bool> {
    let mut intro = welcome(texts);
    intro.push(String::new());
    intro.push(texts.lookup("starting_countdown").to_string());
    intro.push(texts.lookup("prepare_message").to_string());
    intro.push(String::new());

    for n in (1..=3u32).rev() {
        let mut lines = intro.clone();
        lines.push(texts.lookup_formatted("starting_in", &[&n]));
        renderer.clear()?;
        renderer.draw(&lines)?;
        if token.wait_timeout(step) {
            return Ok(false);
        }
    }

    let mut lines = intro;
    lines.push(String::new());
    lines.push(texts.lookup("lets_begin").to_string());
    renderer.clear()?;
    renderer.draw(&lines)?;
    Ok(!token.wait_timeout(step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tgym_core::AnimationConfig;
    use tgym_i18n::{KeyEcho, Localizer};
    use tgym_runtime::{CancellationSource, RecordingRenderer, RenderOp};

    fn english() -> Localizer {
        Localizer::embedded("en").unwrap()
    }

    #[test]
    fn workout_frame_layout() {
        let session = Session::new(ExerciseKind::Strength, &AnimationConfig::default(), None);
        let lines = workout(&KeyEcho, &session);

        assert_eq!(lines[1], "=".repeat(WIDTH));
        assert_eq!(lines[2].trim(), "title");
        assert!(lines.contains(&indent(COLUMN, "watch_follow")));
        assert!(lines.contains(&indent(COLUMN, "rep_counter")));
        assert_eq!(lines.last(), Some(&"-".repeat(WIDTH)));
        let tips_at = lines.iter().position(|l| l == "tips_header").unwrap();
        assert_eq!(lines[tips_at + 1], "tip_follow_rhythm");
    }

    #[test]
    fn instruction_is_centred() {
        let text = ">>> SQUEEZE your glutes <<<";
        let line = centred(text);
        assert_eq!(line.len() - text.len(), (WIDTH - text.chars().count()) / 2);
        let long = "x".repeat(WIDTH + 5);
        assert_eq!(centred(&long), long);
    }

    #[test]
    fn workout_frame_is_localized() {
        let texts = english();
        let session = Session::new(ExerciseKind::Meditation, &AnimationConfig::default(), None);
        let lines = workout(&texts, &session);
        assert!(lines.iter().any(|l| l.trim() == "Breaths completed: 0"));
        assert!(lines.iter().any(|l| l.ends_with("↑ inhaling")));
    }

    #[test]
    fn farewell_summarizes() {
        let texts = english();
        let session = Session::new(ExerciseKind::Strength, &AnimationConfig::default(), None);
        let lines = farewell(&texts, &session);
        assert_eq!(lines[1], "Great workout! Reps completed: 0");
        assert_eq!(lines[2], "Keep up the good work!");
    }

    #[test]
    fn menu_reprompts_until_valid() {
        let mut input = Cursor::new("abc\n7\n 2 \n");
        let mut out = Vec::new();
        let kind = select_exercise(&KeyEcho, &mut input, &mut out).unwrap();
        assert_eq!(kind, ExerciseKind::Meditation);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("invalid_choice").count(), 2);
        assert_eq!(text.matches("enter_choice").count(), 3);
        assert!(text.contains("exercise_buttock"));
    }

    #[test]
    fn menu_eof_is_error() {
        let mut input = Cursor::new("x\n");
        let mut out = Vec::new();
        let err = select_exercise(&KeyEcho, &mut input, &mut out).unwrap_err();
        assert!(matches!(err, GymError::NoSelection));
    }

    #[test]
    fn countdown_runs_to_go() {
        let source = CancellationSource::new();
        let mut renderer = RecordingRenderer::new();
        let done = countdown(&english(), &mut renderer, &source.token(), Duration::from_millis(1)).unwrap();
        assert!(done);

        let frames: Vec<&Vec<String>> = renderer
            .ops()
            .iter()
            .filter_map(|op| match op {
                RenderOp::Draw(lines) => Some(lines),
                RenderOp::Clear => None,
            })
            .collect();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].last().map(String::as_str), Some("Starting in 3..."));
        assert_eq!(frames[2].last().map(String::as_str), Some("Starting in 1..."));
        assert_eq!(frames[3].last().map(String::as_str), Some("Let's begin!"));
    }

    #[test]
    fn countdown_stops_on_cancel() {
        let source = CancellationSource::new();
        source.cancel();
        let mut renderer = RecordingRenderer::new();
        let done = countdown(&KeyEcho, &mut renderer, &source.token(), Duration::from_secs(60)).unwrap();
        assert!(!done);
        assert_eq!(renderer.clears(), 1);
    }
}
