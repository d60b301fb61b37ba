//! Turns one line of chat text into a `Command`.
//!
//! The command word is the first whitespace-delimited token after the prefix.
//! Commands that take no arguments only match when nothing follows them, so
//! `!progress please` is ordinary chat and is ignored.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetGoal(String),
    Goal,
    LogActivity(Vec<String>),
    Progress,
    Motivation,
    CreatePlaylist(String),
    AddSong { playlist: String, song: String },
    ShowPlaylist(String),
    Play(String),
    Stop,
    Help(Option<String>),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetGoal(_) => "setgoal",
            Self::Goal => "goal",
            Self::LogActivity(_) => "logactivity",
            Self::Progress => "progress",
            Self::Motivation => "motivation",
            Self::CreatePlaylist(_) => "createplaylist",
            Self::AddSong { .. } => "addsong",
            Self::ShowPlaylist(_) => "showplaylist",
            Self::Play(_) => "play",
            Self::Stop => "stop",
            Self::Help(_) => "help",
        }
    }
}

/// Returns `None` for anything that is not a recognised command.
pub fn parse(line: &str, prefix: &str) -> Option<Command> {
    let body = line.trim().strip_prefix(prefix)?;
    let (word, rest) = match body.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (body, ""),
    };

    let command = match word {
        "setgoal" => Command::SetGoal(rest.to_string()),
        "goal" if rest.is_empty() => Command::Goal,
        "logactivity" => Command::LogActivity(rest.split_whitespace().map(str::to_owned).collect()),
        "progress" if rest.is_empty() => Command::Progress,
        "motivation" if rest.is_empty() => Command::Motivation,
        "createplaylist" => Command::CreatePlaylist(rest.to_string()),
        "addsong" => {
            let mut tokens = rest.split_whitespace();
            let playlist = tokens.next().unwrap_or_default().to_string();
            let song = tokens.collect::<Vec<_>>().join(" ");
            Command::AddSong { playlist, song }
        }
        "showplaylist" => Command::ShowPlaylist(rest.to_string()),
        "play" => Command::Play(rest.to_string()),
        "stop" if rest.is_empty() => Command::Stop,
        "help" => Command::Help(rest.split_whitespace().next().map(str::to_owned)),
        _ => return None,
    };
    Some(command)
}
