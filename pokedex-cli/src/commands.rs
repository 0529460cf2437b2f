//! REPL command table, parsing, and handlers.

use std::time::Duration;

use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

use pokedex_api::PokeApiClient;
use pokedex_core::constants::{
    CATCH_CHANCE_CEILING, CATCH_CHANCE_FLOOR, CATCH_EXPERIENCE_SCALE,
};

use crate::session::Session;

/// What the REPL loop should do after a command completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplAction {
    /// Prompt for the next command.
    Continue,
    /// Leave the loop; the caller decides how to shut down.
    Exit,
}

/// One row of the command table, shown by `help`.
struct CommandInfo {
    usage: &'static str,
    description: &'static str,
}

const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        usage: "help",
        description: "Displays this help message",
    },
    CommandInfo {
        usage: "map",
        description: "Lists the next 20 location areas",
    },
    CommandInfo {
        usage: "mapb",
        description: "Goes back to the previous 20 location areas",
    },
    CommandInfo {
        usage: "explore <area>",
        description: "Lists the Pokemon found in a location area",
    },
    CommandInfo {
        usage: "catch <pokemon>",
        description: "Throws a Pokeball at a Pokemon",
    },
    CommandInfo {
        usage: "inspect <pokemon>",
        description: "Shows details of a caught Pokemon",
    },
    CommandInfo {
        usage: "pokedex",
        description: "Lists every Pokemon you have caught",
    },
    CommandInfo {
        usage: "exit",
        description: "Exits the Pokedex",
    },
];

/// A parsed REPL input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `help`
    Help,
    /// `exit` (or end of input)
    Exit,
    /// `map`
    Map,
    /// `mapb`
    MapBack,
    /// `explore <area>`
    Explore {
        /// Location-area name, passed to the API verbatim.
        area: String,
    },
    /// `catch <pokemon>`
    Catch {
        /// Pokemon name.
        name: String,
    },
    /// `inspect <pokemon>`
    Inspect {
        /// Pokemon name.
        name: String,
    },
    /// `pokedex`
    Pokedex,
    /// A known command word missing its argument.
    MissingArgument {
        /// The usage line to print.
        usage: &'static str,
    },
    /// Anything else.
    Unknown {
        /// The unrecognized first word.
        word: String,
    },
    /// Blank line.
    Empty,
}

impl Command {
    /// Parses one input line. The first whitespace-separated word selects
    /// the command; the following word, when present, is its argument.
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Command::Empty;
        };
        let arg = words.next().map(str::to_owned);

        match word {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => match arg {
                Some(area) => Command::Explore { area },
                None => Command::MissingArgument {
                    usage: "explore <area>",
                },
            },
            "catch" => match arg {
                Some(name) => Command::Catch { name },
                None => Command::MissingArgument {
                    usage: "catch <pokemon>",
                },
            },
            "inspect" => match arg {
                Some(name) => Command::Inspect { name },
                None => Command::MissingArgument {
                    usage: "inspect <pokemon>",
                },
            },
            "pokedex" => Command::Pokedex,
            _ => Command::Unknown {
                word: word.to_owned(),
            },
        }
    }
}

/// Parses and runs one input line against the session.
///
/// Errors bubble up to the REPL loop, which reports them and keeps
/// prompting; only `exit` (or EOF upstream) ends the loop.
pub async fn dispatch(
    client: &PokeApiClient,
    session: &mut Session,
    line: &str,
) -> Result<ReplAction> {
    match Command::parse(line) {
        Command::Empty => {}
        Command::Exit => return Ok(ReplAction::Exit),
        Command::Help => cmd_help(),
        Command::Map => cmd_map(client, session).await?,
        Command::MapBack => cmd_mapb(client, session).await?,
        Command::Explore { area } => cmd_explore(client, &area).await?,
        Command::Catch { name } => cmd_catch(client, session, &name).await?,
        Command::Inspect { name } => cmd_inspect(session, &name),
        Command::Pokedex => cmd_pokedex(session),
        Command::MissingArgument { usage } => {
            println!("usage: {}", usage.yellow());
        }
        Command::Unknown { word } => {
            println!(
                "Unknown command '{}'. Type {} for the command list.",
                word.red(),
                "help".yellow()
            );
        }
    }
    Ok(ReplAction::Continue)
}

/// Prints the command table.
fn cmd_help() {
    println!("{}", "Welcome to the Pokedex!".cyan().bold());
    println!("Usage:");
    for command in COMMANDS {
        println!("  {:<18} {}", command.usage, command.description);
    }
}

/// Lists the next page of location areas and advances the cursors.
async fn cmd_map(client: &PokeApiClient, session: &mut Session) -> Result<()> {
    let page = client
        .location_areas(session.next_cursor())
        .await
        .context("Failed to fetch location areas")?;

    for area in &page.results {
        println!("{}", area.name);
    }
    session.turn_page(&page);
    Ok(())
}

/// Lists the previous page, or says so on the first page.
async fn cmd_mapb(client: &PokeApiClient, session: &mut Session) -> Result<()> {
    let Some(previous) = session.previous_cursor().map(str::to_owned) else {
        println!(
            "you are on the first page, can't go back, try going forward using {}",
            "map".yellow()
        );
        return Ok(());
    };

    let page = client
        .location_areas(Some(&previous))
        .await
        .context("Failed to fetch location areas")?;

    for area in &page.results {
        println!("{}", area.name);
    }
    session.turn_page(&page);
    Ok(())
}

/// Lists the Pokemon encountered in a location area.
async fn cmd_explore(client: &PokeApiClient, area: &str) -> Result<()> {
    println!("Exploring {}...", area.green());

    match client.location_area(area).await {
        Ok(area) => {
            println!("Found Pokemon:");
            for encounter in &area.pokemon_encounters {
                println!(" - {}", encounter.pokemon.name);
            }
            Ok(())
        }
        Err(err) if err.is_not_found() => {
            println!("{}", format!("No location area named '{area}'").yellow());
            Ok(())
        }
        Err(err) => Err(err).context("Failed to fetch location area"),
    }
}

/// Fetches a Pokemon and rolls an experience-weighted catch attempt.
async fn cmd_catch(client: &PokeApiClient, session: &mut Session, name: &str) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Throwing a Pokeball at {name}..."));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let pokemon = match client.pokemon(name).await {
        Ok(pokemon) => pokemon,
        Err(err) if err.is_not_found() => {
            spinner.finish_and_clear();
            println!("{}", format!("No Pokemon named '{name}'").yellow());
            return Ok(());
        }
        Err(err) => {
            spinner.finish_and_clear();
            return Err(err).context("Failed to fetch Pokemon");
        }
    };
    spinner.finish_and_clear();

    println!("Throwing a Pokeball at {}...", pokemon.name);

    let chance = catch_chance(pokemon.base_experience);
    if rand::thread_rng().gen_bool(chance) {
        println!("{} was caught!", pokemon.name.green().bold());
        println!("You may now inspect it with the {} command.", "inspect".yellow());
        session.record_catch(pokemon);
    } else {
        println!("{} escaped!", pokemon.name.red());
    }
    Ok(())
}

/// Prints the details of a caught Pokemon.
fn cmd_inspect(session: &Session, name: &str) {
    let Some(pokemon) = session.caught(name) else {
        println!("you have not caught that pokemon");
        return;
    };

    println!("Name: {}", pokemon.name);
    println!("Height: {}", pokemon.height);
    println!("Weight: {}", pokemon.weight);
    println!("Stats:");
    for stat in &pokemon.stats {
        println!("  -{}: {}", stat.stat.name, stat.base_stat);
    }
    println!("Types:");
    for slot in &pokemon.types {
        println!("  - {}", slot.kind.name);
    }
}

/// Lists every caught Pokemon.
fn cmd_pokedex(session: &Session) {
    println!("Your Pokedex:");
    let names = session.caught_names();
    if names.is_empty() {
        println!("  It's empty! Go {} some Pokemon.", "catch".yellow());
        return;
    }
    for name in names {
        println!(" - {name}");
    }
}

/// Catch probability for a Pokemon, weighted by its base experience.
///
/// Stronger Pokemon are harder to catch; the result is clamped so every
/// throw stays both winnable and missable.
fn catch_chance(base_experience: Option<u32>) -> f64 {
    let experience = f64::from(base_experience.unwrap_or(0));
    (CATCH_CHANCE_CEILING - experience / CATCH_EXPERIENCE_SCALE)
        .clamp(CATCH_CHANCE_FLOOR, CATCH_CHANCE_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("exit"), Command::Exit);
        assert_eq!(Command::parse("map"), Command::Map);
        assert_eq!(Command::parse("mapb"), Command::MapBack);
        assert_eq!(Command::parse("pokedex"), Command::Pokedex);
    }

    #[test]
    fn test_parse_commands_with_argument() {
        assert_eq!(
            Command::parse("explore canalave-city-area"),
            Command::Explore {
                area: "canalave-city-area".into()
            }
        );
        assert_eq!(
            Command::parse("catch pikachu"),
            Command::Catch {
                name: "pikachu".into()
            }
        );
        assert_eq!(
            Command::parse("inspect pikachu"),
            Command::Inspect {
                name: "pikachu".into()
            }
        );
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        assert_eq!(
            Command::parse("  catch   pidgey  "),
            Command::Catch {
                name: "pidgey".into()
            }
        );
    }

    #[test]
    fn test_parse_missing_argument() {
        assert_eq!(
            Command::parse("explore"),
            Command::MissingArgument {
                usage: "explore <area>"
            }
        );
        assert_eq!(
            Command::parse("catch"),
            Command::MissingArgument {
                usage: "catch <pokemon>"
            }
        );
        assert_eq!(
            Command::parse("inspect"),
            Command::MissingArgument {
                usage: "inspect <pokemon>"
            }
        );
    }

    #[test]
    fn test_parse_unknown_and_empty() {
        assert_eq!(
            Command::parse("teleport"),
            Command::Unknown {
                word: "teleport".into()
            }
        );
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   "), Command::Empty);
    }

    #[tokio::test]
    async fn test_dispatch_exit_signals_loop_instead_of_exiting() {
        let client = PokeApiClient::new();
        let mut session = Session::new();

        // `exit` is a return value for the loop, not a process exit.
        let action = dispatch(&client, &mut session, "exit").await.unwrap();
        assert_eq!(action, ReplAction::Exit);

        // Everything local keeps the loop running.
        for line in ["", "   ", "help", "pokedex", "inspect pidgey", "bogus"] {
            let action = dispatch(&client, &mut session, line).await.unwrap();
            assert_eq!(action, ReplAction::Continue);
        }

        client.shutdown().await;
    }

    #[test]
    fn test_catch_chance_bounds() {
        // No experience data: easiest possible catch.
        assert_eq!(catch_chance(None), CATCH_CHANCE_CEILING);
        assert_eq!(catch_chance(Some(0)), CATCH_CHANCE_CEILING);

        // Mid-range experience lands strictly between the bounds.
        let mid = catch_chance(Some(112));
        assert!(mid > CATCH_CHANCE_FLOOR && mid < CATCH_CHANCE_CEILING);

        // Legendary-grade experience clamps to the floor.
        assert_eq!(catch_chance(Some(635)), CATCH_CHANCE_FLOOR);
        assert_eq!(catch_chance(Some(10_000)), CATCH_CHANCE_FLOOR);
    }

    #[test]
    fn test_catch_chance_monotonic() {
        let weak = catch_chance(Some(36));
        let strong = catch_chance(Some(340));
        assert!(weak > strong);
    }
}
