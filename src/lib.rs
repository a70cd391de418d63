//! Crate root module declarations for the Plum Checkers rules engine.
//!
//! Exposes the board model, move generation and legality, the capture-chain
//! state machine, the heuristic opponent and its engines, the text protocol
//! and utility helpers so binaries, benches and tests share stable paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod capture_chain;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_state;
}

pub mod moves {
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_man;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod capture_depth;
    pub mod move_selector;
}

pub mod engines {
    pub mod engine_heuristic;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod protocol {
    pub mod protocol_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_text;
    pub mod engine_match_harness;
    pub mod long_algebraic;
    pub mod render_game_state;
}
