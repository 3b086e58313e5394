//! Hub screen panels

mod drip_dropper;
mod history_list;
mod notice_toast;
mod quest_panel;
mod reward_roulette;
mod stats_bar;

pub use drip_dropper::DripDropper;
pub use history_list::HistoryList;
pub use notice_toast::NoticeToast;
pub use quest_panel::QuestPanel;
pub use reward_roulette::RewardRoulette;
pub use stats_bar::StatsBar;
