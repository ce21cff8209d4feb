pub mod athlete;
pub mod event;
pub mod score;
pub mod score_list;
pub mod utils;

pub use athlete::Athlete;
pub use event::{Event, Round};
pub use score::{Score, TempId};
pub use score_list::{ScoreList, best_handicap_of};
