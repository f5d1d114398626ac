use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gridline::ai::{DecisionEngine, Difficulty};
use gridline::arena::run_series;
use gridline::config::{AppConfig, GameMode};
use gridline::console::{parse_move, render_board};
use gridline::game::{GameOutcome, GameState, MoveError, Player, ScoreTracker};

/// Play generalized tic-tac-toe in the terminal.
#[derive(Parser)]
#[command(name = "gridline", about = "Tic-tac-toe on 3x3 to 6x6 boards against a computer opponent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gridline.toml")]
    config: PathBuf,

    /// Board size (3-6); the run length to win follows the size
    #[arg(long)]
    size: Option<usize>,

    /// AI difficulty: easy, medium, or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seating: pvp, pva (human vs AI), or ava (AI vs AI)
    #[arg(long)]
    mode: Option<GameMode>,

    /// Play as O instead of X in pva mode
    #[arg(long)]
    play_o: bool,

    /// In ava mode, play this many games silently and print the tally
    #[arg(long)]
    games: Option<u32>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(size) = cli.size {
        config.game.board_size = size;
        config.game.win_condition = None;
    }
    if let Some(difficulty) = cli.difficulty {
        config.ai.difficulty = difficulty;
    }
    if let Some(mode) = cli.mode {
        config.game.mode = mode;
    }
    if cli.play_o {
        config.game.human_player = Player::O;
    }
    config.validate().context("invalid settings")?;

    let engine = DecisionEngine::new(config.ai.difficulty);

    if let (GameMode::Ava, Some(games)) = (config.game.mode, cli.games) {
        let mut score = ScoreTracker::new();
        let result = run_series(
            config.game.board_size,
            &mut engine.clone(),
            &mut engine.clone(),
            games,
            &mut score,
        )?;
        println!(
            "{} vs {} on {size}x{size}: {} / {} / {} draws",
            engine.level(),
            engine.level(),
            result.first_agent_wins,
            result.second_agent_wins,
            result.draws,
            size = config.game.board_size,
        );
        println!("{}", score.stats_line());
        return Ok(());
    }

    let mut session = Session {
        config,
        engine,
        score: ScoreTracker::new(),
        input: io::stdin().lock(),
    };
    session.run()
}

/// One sitting at the terminal: several games and a running score.
struct Session<R> {
    config: AppConfig,
    engine: DecisionEngine,
    score: ScoreTracker,
    input: R,
}

impl<R: BufRead> Session<R> {
    fn run(&mut self) -> Result<()> {
        let game = &self.config.game;
        println!("=== Gridline ===");
        println!(
            "{size}x{size} board, {win} in a row wins",
            size = game.board_size,
            win = game.effective_win_condition()
        );
        match game.mode {
            GameMode::Pvp => println!("Two players, X moves first"),
            GameMode::Pva => println!(
                "You are {}, AI ({}) is {}",
                game.human_player.symbol(),
                self.engine.level(),
                game.human_player.other().symbol()
            ),
            GameMode::Ava => println!("AI ({}) plays both sides", self.engine.level()),
        }
        println!("Enter moves as 'row col'\n");

        loop {
            if !self.play_round()? {
                break;
            }
            println!("{}", self.score.stats_line());
            if !self.ask("Play again? [y/N] ")?.is_some_and(|a| a.trim().eq_ignore_ascii_case("y")) {
                break;
            }
        }

        println!("\nThanks for playing!");
        Ok(())
    }

    fn is_human(&self, player: Player) -> bool {
        match self.config.game.mode {
            GameMode::Pvp => true,
            GameMode::Pva => player == self.config.game.human_player,
            GameMode::Ava => false,
        }
    }

    /// Play one game. Returns false if input ended before the game did.
    fn play_round(&mut self) -> Result<bool> {
        let mut state = GameState::with_board(self.config.game.board());

        while !state.is_terminal() {
            println!("{}", render_board(state.board(), &[]));
            let player = state.current_player();

            if self.is_human(player) {
                let prompt = format!("{} move (row col): ", player.name());
                let Some(line) = self.ask(&prompt)? else {
                    return Ok(false);
                };
                let mv = match parse_move(&line, state.board().size()) {
                    Ok(mv) => mv,
                    Err(e) => {
                        println!("Invalid input: {e}");
                        continue;
                    }
                };
                match state.apply_move(mv.row, mv.col) {
                    Ok(()) => {}
                    Err(MoveError::Occupied { .. }) => println!("That position is already taken!"),
                    Err(e) => println!("Invalid move: {e}"),
                }
            } else {
                println!("AI is thinking...");
                let Some(mv) = self.engine.get_move(state.board(), player) else {
                    break;
                };
                state
                    .apply_move(mv.row, mv.col)
                    .with_context(|| format!("engine chose ({}, {})", mv.row, mv.col))?;
                println!("AI played {} at ({}, {})", player.symbol(), mv.row, mv.col);
            }
        }

        println!("{}", render_board(state.board(), state.win_info().winning_cells()));
        if let Some(outcome) = state.outcome() {
            self.announce(outcome);
            self.score.record_outcome(outcome);
        }
        Ok(true)
    }

    fn announce(&self, outcome: GameOutcome) {
        match (outcome, self.config.game.mode) {
            (GameOutcome::Draw, _) => println!("It's a draw!"),
            (GameOutcome::Winner(p), GameMode::Pva) if p == self.config.game.human_player => {
                println!("Congratulations! You won!")
            }
            (GameOutcome::Winner(_), GameMode::Pva) => println!("AI wins! Better luck next time."),
            (GameOutcome::Winner(p), _) => println!("{} wins!", p.name()),
        }
    }

    /// Prompt and read one line; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush().context("flushing stdout")?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("reading stdin")?;
        Ok((read > 0).then_some(line))
    }
}
