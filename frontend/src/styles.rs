pub const PAGE: &str = "max-w-7xl mx-auto px-4 py-8";
pub const HEADER: &str = "text-center mb-8 text-white";
pub const HEADING_XL: &str = "text-4xl md:text-6xl font-bold mb-4 drop-shadow-2xl";
pub const SUBTITLE: &str = "text-xl md:text-2xl";
pub const CARD_GRID: &str = "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 mb-8";

pub const CARD: &str = "contestant-card bg-white/95 backdrop-blur-md rounded-2xl p-6 shadow-xl border border-white/20 transition-all duration-300 hover:transform hover:-translate-y-2 hover:shadow-2xl";
pub const CARD_IMAGE: &str = "w-full h-48 object-cover rounded-xl mb-4";
pub const CARD_NAME: &str = "text-2xl font-bold text-gray-800 mb-2";
pub const CARD_CATEGORY: &str = "text-purple-600 font-medium mb-3 italic";
pub const CARD_DESCRIPTION: &str = "text-gray-600 leading-relaxed";

pub const CARD_FALLBACK: &str = "bg-red-50 border-2 border-red-200 rounded-lg p-6 text-center text-red-700";
pub const CARD_FALLBACK_RETRY: &str = "bg-red-500 text-white px-4 py-2 rounded hover:bg-red-600 transition-colors";

pub const STATUS_BANNER: &str = "voting-status rounded-2xl p-6 mb-8 text-center text-white backdrop-blur-md border";
pub const STATUS_ACTIVE: &str = "bg-green-500/20 border-green-400/50";
pub const STATUS_CLOSED: &str = "bg-red-500/20 border-red-400/50";

pub const VOTE_BUTTON_BASE: &str = "w-full sm:w-auto px-6 py-3 rounded-full font-bold text-white transition-all duration-300 flex items-center justify-center gap-2 min-h-[44px]";
pub const VOTE_BUTTON_ACTIVE: &str = "bg-gradient-to-r from-red-500 to-pink-500 hover:from-red-600 hover:to-pink-600 hover:scale-105 active:scale-95 shadow-lg hover:shadow-xl";
pub const VOTE_BUTTON_DISABLED: &str = "bg-gray-400 cursor-not-allowed";

pub const MESSAGE_BASE: &str = "mt-2 p-2 rounded text-sm";
pub const MESSAGE_SUCCESS: &str = "bg-green-100 text-green-700 border border-green-200";
pub const MESSAGE_FAILURE: &str = "bg-red-100 text-red-700 border border-red-200";

pub const VOTE_USAGE: &str = "text-sm text-gray-600 mt-2";
pub const VOTE_TALLY: &str = "vote-count text-2xl font-bold text-blue-600 flex items-center gap-1";

pub const FOOTER: &str = "text-center text-white";
pub const UPDATING_FLASH: &str = "text-red-300 mb-4 animate-pulse";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn vote_button_class(disabled: bool) -> String {
    if disabled {
        combine_classes(VOTE_BUTTON_BASE, VOTE_BUTTON_DISABLED)
    } else {
        combine_classes(VOTE_BUTTON_BASE, VOTE_BUTTON_ACTIVE)
    }
}
