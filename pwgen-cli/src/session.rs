use std::io::{BufRead, Write};

use log::debug;
use pwgen_lib::{
    charset::CharacterClass,
    policy::{handle_request, GenerationRequest, GenerationResult},
    zeroize::Zeroizing,
};

use crate::clipboard::{copy_or_warn, ClipboardSink};
use crate::command::Command;

/// State of the interactive form: the current settings and the last
/// password generated from them.
pub struct Session {
    request: GenerationRequest,
    last: Option<Zeroizing<String>>,
    auto_copy: bool,
}

impl Session {
    pub fn new(request: GenerationRequest, auto_copy: bool) -> Self {
        Self {
            request,
            last: None,
            auto_copy,
        }
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    pub fn last_password(&self) -> Option<&str> {
        self.last.as_ref().map(|password| password.as_str())
    }

    pub fn run<R, C, W>(&mut self, input: R, clipboard: &mut C, out: &mut W) -> std::io::Result<()>
    where
        R: BufRead,
        C: ClipboardSink + ?Sized,
        W: Write + ?Sized,
    {
        Self::help(out)?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;

            match Command::parse(&line) {
                Ok(Some(command)) => {
                    if !self.execute(command, clipboard, out)? {
                        return Ok(());
                    }
                }
                Ok(None) => (),
                Err(error) => writeln!(out, "{}", error)?,
            }

            write!(out, "> ")?;
            out.flush()?;
        }

        writeln!(out)?;
        Ok(())
    }

    /// Returns false once the session should end
    pub fn execute<C, W>(
        &mut self,
        command: Command,
        clipboard: &mut C,
        out: &mut W,
    ) -> std::io::Result<bool>
    where
        C: ClipboardSink + ?Sized,
        W: Write + ?Sized,
    {
        debug!("executing {:?}", command);

        match command {
            Command::Help => Self::help(out)?,
            Command::Show => self.show(out)?,
            Command::Length(length) => {
                self.request.length = length;
                writeln!(out, "Length set to {}", length)?;
            }
            Command::Toggle(class) => {
                let enabled = self.toggle(class);
                writeln!(
                    out,
                    "{} {}",
                    class,
                    if enabled { "enabled" } else { "disabled" }
                )?;
            }
            Command::Generate => self.generate(clipboard, out)?,
            Command::Password => match self.last_password() {
                Some(password) => writeln!(out, "{}", password)?,
                None => writeln!(out, "No password generated yet")?,
            },
            Command::Copy => match self.last.as_ref() {
                Some(password) => {
                    copy_or_warn(clipboard, password.as_str(), out)?;
                }
                None => writeln!(out, "No password generated yet")?,
            },
            Command::Quit => return Ok(false),
        }

        Ok(true)
    }

    fn toggle(&mut self, class: CharacterClass) -> bool {
        let mut classes = self.request.classes();
        classes.toggle(class);
        self.request.set_classes(classes);
        classes.contains(class)
    }

    fn generate<C, W>(&mut self, clipboard: &mut C, out: &mut W) -> std::io::Result<()>
    where
        C: ClipboardSink + ?Sized,
        W: Write + ?Sized,
    {
        match handle_request(&self.request) {
            GenerationResult::Password { password } => {
                writeln!(out, "Password Generated Successfully!")?;
                writeln!(out, "{}", password.as_str())?;
                if self.auto_copy {
                    copy_or_warn(clipboard, password.as_str(), out)?;
                }
                self.last = Some(password);
            }
            // A rejected request keeps the previous password
            GenerationResult::Error { error_message } => {
                writeln!(out, "{}", error_message)?;
            }
        }

        Ok(())
    }

    fn show<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        let classes = self.request.classes();

        writeln!(out, "Length: {}", self.request.length)?;
        for class in CharacterClass::ALL {
            let mark = if classes.contains(class) { "x" } else { " " };
            writeln!(out, "[{}] {}", mark, class)?;
        }

        Ok(())
    }

    fn help<W: Write + ?Sized>(out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Commands:")?;
        writeln!(out, "  show                    show current settings")?;
        writeln!(out, "  length <n>              set the password length (8 to 128)")?;
        writeln!(out, "  toggle <class>          toggle lower, upper, digits or symbols")?;
        writeln!(out, "  generate | g            generate a password")?;
        writeln!(out, "  password | p            print the last password")?;
        writeln!(out, "  copy | c                copy the last password to the clipboard")?;
        writeln!(out, "  help                    show this message")?;
        writeln!(out, "  quit | exit | q         leave")?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use pwgen_lib::{charset::CharacterClass, policy::GenerationRequest};

    use super::Session;
    use crate::clipboard::{test::FakeClipboard, MANUAL_COPY_MESSAGE};
    use crate::command::Command;

    fn output(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn session_generate_and_copy() {
        let mut session = Session::new(GenerationRequest::default(), false);
        let mut clipboard = FakeClipboard::default();
        let mut out = Vec::new();

        assert!(session
            .execute(Command::Generate, &mut clipboard, &mut out)
            .unwrap());
        let password = session.last_password().unwrap().to_string();
        assert_eq!(password.len(), 12);
        assert!(clipboard.contents.is_none());

        session
            .execute(Command::Copy, &mut clipboard, &mut out)
            .unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some(password.as_str()));
    }

    #[test]
    fn session_rejected_request_keeps_last() {
        let mut session = Session::new(GenerationRequest::default(), false);
        let mut clipboard = FakeClipboard::default();
        let mut out = Vec::new();

        session
            .execute(Command::Generate, &mut clipboard, &mut out)
            .unwrap();
        let first = session.last_password().unwrap().to_string();

        session
            .execute(Command::Length(4), &mut clipboard, &mut out)
            .unwrap();
        session
            .execute(Command::Generate, &mut clipboard, &mut out)
            .unwrap();

        assert_eq!(session.last_password(), Some(first.as_str()));
        assert!(output(out).contains("Length must be at least 8 for a secure password."));
    }

    #[test]
    fn session_toggle_all_off() {
        let mut session = Session::new(GenerationRequest::default(), false);
        let mut clipboard = FakeClipboard::default();
        let mut out = Vec::new();

        for class in CharacterClass::ALL {
            session
                .execute(Command::Toggle(class), &mut clipboard, &mut out)
                .unwrap();
        }
        assert!(session.request().classes().is_empty());

        session
            .execute(Command::Generate, &mut clipboard, &mut out)
            .unwrap();
        assert!(session.last_password().is_none());
        assert!(output(out).contains("You must select at least one character type."));
    }

    #[test]
    fn session_auto_copy_unavailable() {
        let mut session = Session::new(GenerationRequest::default(), true);
        let mut clipboard = FakeClipboard {
            contents: None,
            broken: true,
        };
        let mut out = Vec::new();

        session
            .execute(Command::Generate, &mut clipboard, &mut out)
            .unwrap();
        assert!(session.last_password().is_some());
        assert!(output(out).contains(MANUAL_COPY_MESSAGE));
    }

    #[test]
    fn session_run_script() {
        let mut session = Session::new(GenerationRequest::default(), false);
        let mut clipboard = FakeClipboard::default();
        let mut out = Vec::new();

        let script = "length 20\ntoggle symbols\nbogus\n\ngenerate\nquit\ngenerate\n";
        session
            .run(script.as_bytes(), &mut clipboard, &mut out)
            .unwrap();

        let password = session.last_password().unwrap();
        assert_eq!(password.len(), 20);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));

        let text = output(out);
        assert!(text.contains("Unknown command \"bogus\""));
        assert_eq!(text.matches("Password Generated Successfully!").count(), 1);
    }
}
