use std::io::{self, stdout, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor::MoveToColumn,
    event::{
        poll,
        read,
        DisableBracketedPaste,
        DisableFocusChange,
        EnableBracketedPaste,
        EnableFocusChange,
        Event,
        KeyCode,
        KeyModifiers,
    },
    execute,
    style::Print,
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use tracing_subscriber::EnvFilter;

use inputmask::install::DefaultPolicy;
use inputmask_field::MaskedField;

const PROMPT: &str = "> ";

fn main() -> Result<(), io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let pattern = std::env::args().nth(1).unwrap_or_else(|| "(###) ###-####".to_string());
    let mut field = MaskedField::from_pattern(&pattern, DefaultPolicy::OnFocus)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    println!("Editing {pattern:?}; Enter accepts, Esc quits.");

    crossterm::terminal::enable_raw_mode()?;
    execute!(stdout(), EnableBracketedPaste, EnableFocusChange)?;

    field.focus();

    let res = edit(&mut field);

    execute!(stdout(), DisableFocusChange, DisableBracketedPaste, Print("\r\n"))?;
    crossterm::terminal::disable_raw_mode()?;

    match res? {
        Some(text) => {
            println!("Accepted {:?} (complete: {})", text, field.is_complete());
        },
        None => {
            println!("Cancelled");
        },
    }

    Ok(())
}

fn edit(field: &mut MaskedField) -> Result<Option<String>, io::Error> {
    let mut stdout = stdout();

    loop {
        redraw(&mut stdout, field)?;

        if !poll(Duration::from_millis(500))? {
            continue;
        }

        match read()? {
            Event::Key(ke) if ke.code == KeyCode::Enter => {
                return Ok(Some(field.text()));
            },
            Event::Key(ke) if ke.code == KeyCode::Esc => {
                return Ok(None);
            },
            Event::Key(ke)
                if ke.code == KeyCode::Char('c') && ke.modifiers == KeyModifiers::CONTROL =>
            {
                return Ok(None);
            },
            ev => {
                field.handle_event(&ev);
            },
        }
    }
}

fn redraw(stdout: &mut Stdout, field: &MaskedField) -> Result<(), io::Error> {
    let col = PROMPT.chars().count() + field.caret();
    let col = u16::try_from(col).unwrap_or(u16::MAX);

    stdout
        .queue(MoveToColumn(0))?
        .queue(Clear(ClearType::CurrentLine))?
        .queue(Print(PROMPT))?
        .queue(Print(field.text()))?
        .queue(MoveToColumn(col))?;

    stdout.flush()
}
