//! The `help` command: a categorised catalogue of every command, or the
//! details of a single one with `help <command>`.

use crate::commands::Reply;
use crate::ui::style::{COLOR_ALERT, COLOR_HELP};

#[derive(Clone, Copy, PartialEq, Eq)]
enum CommandCategory {
    Fitness,
    Music,
    General,
}

impl CommandCategory {
    fn name(&self) -> &'static str {
        match self {
            Self::Fitness => "Fitness",
            Self::Music => "Music",
            Self::General => "General",
        }
    }
    fn emoji(&self) -> &'static str {
        match self {
            Self::Fitness => "🏋️",
            Self::Music => "🎵",
            Self::General => "🔧",
        }
    }
}

struct CommandInfo {
    name: &'static str,
    description: &'static str,
    usage: &'static str,
    details: &'static str,
    category: CommandCategory,
}

const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "setgoal",
        description: "Set your fitness goal.",
        usage: "setgoal <goal>",
        details: "Replaces any goal you set before. Example: `setgoal Run 5km every week`.",
        category: CommandCategory::Fitness,
    },
    CommandInfo {
        name: "goal",
        description: "Show your current fitness goal.",
        usage: "goal",
        details: "Displays the goal you last set with `setgoal`.",
        category: CommandCategory::Fitness,
    },
    CommandInfo {
        name: "logactivity",
        description: "Log a workout.",
        usage: "logactivity <type> <duration_in_minutes>",
        details: "Records one activity for today. The duration must be a whole number of minutes.",
        category: CommandCategory::Fitness,
    },
    CommandInfo {
        name: "progress",
        description: "See your total minutes per activity.",
        usage: "progress",
        details: "Sums every logged activity by type.",
        category: CommandCategory::Fitness,
    },
    CommandInfo {
        name: "motivation",
        description: "Get a motivational GIF.",
        usage: "motivation",
        details: "Fetches a random fitness GIF.",
        category: CommandCategory::Fitness,
    },
    CommandInfo {
        name: "createplaylist",
        description: "Create a new playlist.",
        usage: "createplaylist <name>",
        details: "Playlist names are single words and unique per user.",
        category: CommandCategory::Music,
    },
    CommandInfo {
        name: "addsong",
        description: "Add a song to one of your playlists.",
        usage: "addsong <playlist_name> <song_name>",
        details: "Songs are kept in the order they were added.",
        category: CommandCategory::Music,
    },
    CommandInfo {
        name: "showplaylist",
        description: "List the songs in a playlist.",
        usage: "showplaylist <playlist_name>",
        details: "Shows the songs in order.",
        category: CommandCategory::Music,
    },
    CommandInfo {
        name: "play",
        description: "Play a song in your voice channel.",
        usage: "play <song>",
        details: "Searches for the song, joins your voice channel and queues the best match.",
        category: CommandCategory::Music,
    },
    CommandInfo {
        name: "stop",
        description: "Stop the music and clear the queue.",
        usage: "stop",
        details: "Stops playback for the whole server and leaves the voice channel.",
        category: CommandCategory::Music,
    },
    CommandInfo {
        name: "help",
        description: "Shows this help menu.",
        usage: "help [command]",
        details: "Lists every command, or shows details for one command.",
        category: CommandCategory::General,
    },
];

pub fn all_command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|c| c.name).collect()
}

fn commands_in_category(category: CommandCategory, prefix: &str) -> String {
    COMMANDS
        .iter()
        .filter(|c| c.category == category)
        .map(|c| format!("`{}{}` {}", prefix, c.usage, c.description))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render(prefix: &str, command_name: Option<&str>) -> Reply {
    let footer = format!("Current Prefix: {prefix}");
    let Some(name) = command_name else {
        let mut reply = Reply::embed(
            "Help Menu",
            format!("Here are my available commands. For more details, use `{prefix}help <command>`."),
            COLOR_HELP,
        );
        for category in [
            CommandCategory::Fitness,
            CommandCategory::Music,
            CommandCategory::General,
        ] {
            let list = commands_in_category(category, prefix);
            if !list.is_empty() {
                reply = reply.with_field(format!("{} {}", category.emoji(), category.name()), list);
            }
        }
        return reply.with_footer(footer);
    };

    let name = name.trim_start_matches(prefix);
    match COMMANDS.iter().find(|c| c.name == name) {
        Some(cmd) => Reply::embed(
            format!("{} Command: {}", cmd.category.emoji(), cmd.name),
            cmd.description,
            COLOR_HELP,
        )
        .with_field("Usage", format!("`{}{}`", prefix, cmd.usage))
        .with_field("Details", cmd.details)
        .with_footer(footer),
        None => Reply::embed(
            "Command Not Found",
            format!("Sorry, I don't know a command called `{name}`."),
            COLOR_ALERT,
        ),
    }
}
