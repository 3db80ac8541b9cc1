use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;

use draughts_engine::board::Board;
use draughts_engine::game::{
    play_game, EnginePlayer, GameConfig, GameObserver, Player, PlayerKind, RandomPlayer, SilentObserver,
    StdoutObserver, USAGE,
};

fn make_player(kind: PlayerKind, config: &GameConfig, rng: StdRng) -> Box<dyn Player> {
    match kind {
        PlayerKind::Engine => Box::new(EnginePlayer::new(config.depth).with_report(config.verbose)),
        PlayerKind::Random => Box::new(RandomPlayer::new(rng)),
    }
}

fn main() -> ExitCode {
    let config = match GameConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };
    if config.show_help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let mut board = match config.position.as_deref() {
        Some(notation) => match Board::try_from_notation(notation) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("Invalid position: {e}");
                return ExitCode::from(2);
            }
        },
        None => Board::new(),
    };

    let mut seeder = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let white_rng = StdRng::from_rng(&mut seeder).unwrap_or_else(|_| StdRng::seed_from_u64(1));
    let black_rng = StdRng::from_rng(&mut seeder).unwrap_or_else(|_| StdRng::seed_from_u64(2));
    let mut white = make_player(config.white, &config, white_rng);
    let mut black = make_player(config.black, &config, black_rng);

    let mut observer: Box<dyn GameObserver> = if config.quiet {
        Box::new(SilentObserver)
    } else {
        Box::new(StdoutObserver)
    };

    match play_game(
        &mut board,
        white.as_mut(),
        black.as_mut(),
        config.max_plies,
        observer.as_mut(),
    ) {
        Ok(record) => {
            if config.quiet {
                println!("{} after {} plies", record.outcome, record.plies);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
