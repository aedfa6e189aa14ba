use critter::command::Command;
use critter::core::constants::REPLAY_CHECK_INTERVAL_MS;
use critter::core::{load_params, Caretaker, SystemClock};
use critter::creature::actions::ActionOutcome;
use critter::creature::status::StatusSnapshot;
use critter::creature::types::Creature;
use critter::ui::farewell::FarewellScreen;
use critter::ui::naming::NamingScreen;
use critter::ui::GameScreen;
use critter::utils::logging;
use critter::utils::persistence::{LoadOutcome, SaveStore};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::ThreadRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

type Keeper = Caretaker<SystemClock, ThreadRng>;

enum Screen {
    Naming,
    Game,
    Farewell,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut status_only = false;

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("critter {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Critter - a virtual pet for your terminal\n");
                println!("Usage: critter [command]\n");
                println!("Commands:");
                println!("  status          Print your pet's status and exit");
                println!("  --print-config  Print the effective simulation settings as JSON");
                println!("  --version       Show version information");
                println!("  --help          Show this help message");
                println!("\nSettings are read from ~/.critter/config.json.");
                println!("Set CRITTER_LOG (e.g. critter=debug) to tune ~/.critter/critter.log.");
                std::process::exit(0);
            }
            "--print-config" => {
                let store = open_store()?;
                let (params, _) = load_params(&store.config_path());
                let json = serde_json::to_string_pretty(&params)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                println!("{}", json);
                std::process::exit(0);
            }
            "status" => status_only = true,
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'critter --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let store = open_store()?;
    logging::init(&store.log_path());
    let (params, warnings) = load_params(&store.config_path());
    let mut caretaker: Keeper = Caretaker::new(params, SystemClock, rand::thread_rng());

    let mut notice = None;
    let creature = match store.load(caretaker.now(), caretaker.params()) {
        Ok(LoadOutcome::Loaded(creature)) => Some(creature),
        Ok(LoadOutcome::Missing) => None,
        Ok(LoadOutcome::Corrupt { backup, .. }) => {
            notice = Some(match backup {
                Some(path) => format!(
                    "Your save was unreadable and was moved to {}.",
                    path.display()
                ),
                None => "Your save was unreadable and has been ignored.".to_string(),
            });
            None
        }
        Err(e) => {
            eprintln!("Could not load save: {}", e);
            std::process::exit(1);
        }
    };

    if status_only {
        return print_status(&store, &mut caretaker, creature);
    }

    tracing::info!("critter starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = GameScreen::new();
    if !warnings.is_empty() {
        game.last_outcome = Some(ActionOutcome::rejected(format!(
            "{} config problem(s), defaults used. See {}.",
            warnings.len(),
            store.log_path().display()
        )));
    }

    let result = run(&mut terminal, &store, &mut caretaker, creature, notice, game);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("critter exiting");
    if let Some(error) = result? {
        eprintln!("{}", error);
        std::process::exit(1);
    }
    Ok(())
}

fn open_store() -> io::Result<SaveStore> {
    SaveStore::new().map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// The `status` subcommand: catch up, print, save.
fn print_status(
    store: &SaveStore,
    caretaker: &mut Keeper,
    creature: Option<Creature>,
) -> io::Result<()> {
    let Some(mut creature) = creature else {
        println!("You don't have a critter yet. Run 'critter' to adopt one.");
        return Ok(());
    };
    let report = caretaker.replay(&mut creature);
    for event in &report.events {
        println!("* {}", event.message());
    }
    let snapshot = StatusSnapshot::capture(&creature, caretaker.now(), caretaker.params());
    print!("{}", snapshot.to_plain_text());
    if let Err(e) = store.save(&creature) {
        eprintln!("Save failed: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn save(store: &SaveStore, creature: &Creature) -> Option<String> {
    match store.save(creature) {
        Ok(()) => None,
        Err(e) => {
            tracing::error!("save failed: {}", e);
            Some(format!("Save failed: {}", e))
        }
    }
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    store: &SaveStore,
    caretaker: &mut Keeper,
    mut creature: Option<Creature>,
    notice: Option<String>,
    mut game: GameScreen,
) -> io::Result<Option<String>> {
    let mut naming_screen = match notice {
        Some(notice) => NamingScreen::with_notice(notice),
        None => NamingScreen::new(),
    };
    let mut farewell_screen = FarewellScreen::new();
    let mut current_screen = match &creature {
        None => Screen::Naming,
        Some(c) if !c.alive => Screen::Farewell,
        Some(_) => Screen::Game,
    };

    // Error from the save made on the way out, shown after the terminal is restored
    let mut exit_error = None;

    let replay_interval = Duration::from_millis(REPLAY_CHECK_INTERVAL_MS);
    let mut last_replay = Instant::now();
    if let Some(c) = creature.as_mut() {
        let report = caretaker.replay(c);
        if !report.is_empty() {
            game.last_outcome = Some(ActionOutcome::success(format!(
                "While you were away: {}",
                report.summary(caretaker.params())
            )));
        }
        if !c.alive {
            current_screen = Screen::Farewell;
        }
    }

    // Main loop
    loop {
        match current_screen {
            Screen::Naming => {
                terminal.draw(|f| {
                    let area = f.size();
                    naming_screen.draw(f, area);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }
                        match key_event.code {
                            KeyCode::Char('c')
                                if key_event.modifiers.contains(KeyModifiers::CONTROL) =>
                            {
                                break;
                            }
                            KeyCode::Char(c) => naming_screen.handle_char_input(c),
                            KeyCode::Backspace => naming_screen.handle_backspace(),
                            KeyCode::Enter => {
                                if naming_screen.is_valid() {
                                    let newborn = caretaker.adopt(&naming_screen.get_name());
                                    game = GameScreen::new();
                                    game.last_outcome = Some(ActionOutcome::success(format!(
                                        "Say hello to {}!",
                                        newborn.name
                                    )));
                                    if let Some(error) = save(store, &newborn) {
                                        game.last_outcome = Some(ActionOutcome::rejected(error));
                                    }
                                    creature = Some(newborn);
                                    naming_screen = NamingScreen::new();
                                    last_replay = Instant::now();
                                    current_screen = Screen::Game;
                                }
                            }
                            KeyCode::Esc => break,
                            _ => {}
                        }
                    }
                }
            }

            Screen::Game => {
                let Some(pet) = creature.as_mut() else {
                    current_screen = Screen::Naming;
                    continue;
                };

                if last_replay.elapsed() >= replay_interval {
                    caretaker.replay(pet);
                    last_replay = Instant::now();
                }

                let snapshot = StatusSnapshot::capture(pet, caretaker.now(), caretaker.params());
                terminal.draw(|f| game.draw(f, &snapshot))?;

                if !pet.alive {
                    if let Some(error) = save(store, pet) {
                        game.last_outcome = Some(ActionOutcome::rejected(error));
                    }
                    farewell_screen = FarewellScreen::new();
                    current_screen = Screen::Farewell;
                    continue;
                }

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }
                        match key_event.code {
                            KeyCode::Char('c')
                                if key_event.modifiers.contains(KeyModifiers::CONTROL) =>
                            {
                                exit_error = save(store, pet);
                                break;
                            }
                            KeyCode::Char(c) => game.command_input.handle_char_input(c),
                            KeyCode::Backspace => game.command_input.handle_backspace(),
                            KeyCode::Left => game.command_input.move_left(),
                            KeyCode::Right => game.command_input.move_right(),
                            KeyCode::Enter => {
                                let line = game.command_input.take();
                                match Command::parse(&line) {
                                    Ok(command) => {
                                        let reply = caretaker.execute(pet, command);
                                        last_replay = Instant::now();
                                        if reply.quit {
                                            exit_error = save(store, pet);
                                            break;
                                        }
                                        game.last_outcome = Some(reply.outcome);
                                    }
                                    Err(e) => {
                                        game.last_outcome =
                                            Some(ActionOutcome::rejected(e.to_string()));
                                    }
                                }
                            }
                            KeyCode::Esc => {
                                exit_error = save(store, pet);
                                break;
                            }
                            _ => {}
                        }
                    }
                }
            }

            Screen::Farewell => {
                let Some(pet) = creature.as_ref() else {
                    current_screen = Screen::Naming;
                    continue;
                };
                let snapshot = StatusSnapshot::capture(pet, caretaker.now(), caretaker.params());
                terminal.draw(|f| {
                    let area = f.size();
                    farewell_screen.draw(f, area, &snapshot);
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key_event) = event::read()? {
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }
                        match key_event.code {
                            KeyCode::Char('c')
                                if key_event.modifiers.contains(KeyModifiers::CONTROL) =>
                            {
                                break;
                            }
                            KeyCode::Char(c) => {
                                farewell_screen.confirmation_input.handle_char_input(c)
                            }
                            KeyCode::Backspace => {
                                farewell_screen.confirmation_input.handle_backspace()
                            }
                            KeyCode::Enter => {
                                if farewell_screen.is_confirmed(&pet.name) {
                                    tracing::info!(name = %pet.name, "reset after death");
                                    farewell_screen = FarewellScreen::new();
                                    naming_screen = NamingScreen::new();
                                    current_screen = Screen::Naming;
                                }
                            }
                            KeyCode::Esc => break,
                            _ => {}
                        }
                    }
                }
            }
        }
    }

    Ok(exit_error)
}
