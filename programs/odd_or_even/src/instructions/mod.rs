pub mod open_house;
pub mod update_house;
pub mod player_init;
pub mod quit_game;
pub mod accept_game;
pub mod result_game;
pub mod claim_game;
pub mod views;
pub mod shared;

pub use open_house::*;
pub use update_house::*;
pub use player_init::*;
pub use quit_game::*;
pub use accept_game::*;
pub use result_game::*;
pub use claim_game::*;
pub use views::*;
