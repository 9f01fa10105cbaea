use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use disc_othello::{Action, Board, Game, Player};
use disc_player::config::{self, BoardSetup, EvalParams};
use disc_player::play::{self, StrategyKind};
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "disc-player",
    version,
    about = "Pick Othello moves with negamax search"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Choose one move for the configured colour and show the board after it
    Best {
        #[command(flatten)]
        setup: SetupArgs,
        /// Move-selection policy
        #[arg(short = 's', long, value_enum, default_value_t = StrategyKind::Negamax)]
        strategy: StrategyKind,
    },
    /// Play a full game between two strategies, starting with the configured colour
    Selfplay {
        #[command(flatten)]
        setup: SetupArgs,
        /// Policy for Black
        #[arg(long, value_enum, default_value_t = StrategyKind::Negamax)]
        black: StrategyKind,
        /// Policy for White
        #[arg(long, value_enum, default_value_t = StrategyKind::Greedy)]
        white: StrategyKind,
    },
}

#[derive(Args, Debug)]
struct SetupArgs {
    /// Starting board file (Size, White, Black, Color)
    #[arg(short = 'b', long = "board", value_name = "FILE")]
    board: Option<PathBuf>,
    /// Search parameter file (MaxDepth, MaxBoards)
    #[arg(short = 'p', long = "params", value_name = "FILE")]
    params: Option<PathBuf>,
    /// Search depth, overriding the parameter file
    #[arg(short = 'd', long, value_parser = clap::value_parser!(u32).range(1..))]
    depth: Option<u32>,
}

impl SetupArgs {
    fn load(&self) -> Result<(BoardSetup, EvalParams), config::ConfigError> {
        let setup = match &self.board {
            Some(path) => config::load_board_setup(path)?,
            None => BoardSetup::default(),
        };
        let mut params = match &self.params {
            Some(path) => config::load_eval_params(path)?,
            None => EvalParams::default(),
        };
        if let Some(depth) = self.depth {
            params.max_depth = depth;
        }
        Ok((setup, params))
    }
}

fn describe(board: &Board, action: Action) -> String {
    match action {
        Action::Place(square) => board.geometry().index_to_label(square),
        Action::Pass => "pass".to_string(),
    }
}

fn best(setup: BoardSetup, params: EvalParams, kind: StrategyKind) -> Result<(), Box<dyn std::error::Error>> {
    let game = Game::new(Board::from_layout(&setup.layout), setup.color);
    let board = game.board.clone();
    println!("initial:\n{}\n", board);

    let moves = game.legal_moves().into_iter().map(|mv| board.geometry().index_to_label(mv));
    println!("legal moves: [{}]", moves.format(", "));

    let mut strategy = kind.build(&params);
    let (game, ply) = play::play_turn(game, strategy.as_mut())?;
    println!(
        "move: {} ({} boards evaluated)",
        describe(&board, ply.action),
        ply.stats.boards_evaluated
    );
    println!("after:\n{}\n", game.board);
    println!("score: {}", game.board.score(setup.color));
    Ok(())
}

fn selfplay(
    setup: BoardSetup,
    params: EvalParams,
    black: StrategyKind,
    white: StrategyKind,
) -> Result<(), Box<dyn std::error::Error>> {
    let game = Game::new(Board::from_layout(&setup.layout), setup.color);
    println!("{}\n", game);

    let mut black = black.build(&params);
    let mut white = white.build(&params);
    let game = play::self_play(game, black.as_mut(), white.as_mut(), |game, ply| {
        println!("{}: {}", ply.player, describe(&game.board, ply.action));
        println!("{}\n", game.board);
    })?;

    println!(
        "final score: Black {} / White {}",
        game.board.count(Player::Black.disc()),
        game.board.count(Player::White.disc())
    );
    match game.winner() {
        Some(winner) => println!("Winner: {}.", winner),
        None => println!("Draw."),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Best { setup, strategy } => {
            let (board_setup, params) = setup.load()?;
            best(board_setup, params, strategy)
        }
        Command::Selfplay {
            setup,
            black,
            white,
        } => {
            let (board_setup, params) = setup.load()?;
            selfplay(board_setup, params, black, white)
        }
    }
}
