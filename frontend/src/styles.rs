pub const MAIN: &str = "relative min-h-screen flex flex-col items-center justify-center p-4 safe-area-inset overflow-hidden bg-gray-950 text-white";
pub const HEADER: &str = "relative z-10 text-center mb-8 sm:mb-12 animate-fade-in";
pub const HEADER_ROW: &str = "flex items-center justify-center gap-3 sm:gap-4 mb-3 sm:mb-4";
pub const HERO_TITLE: &str = "text-3xl sm:text-4xl md:text-5xl lg:text-7xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-violet-400 via-cyan-400 to-pink-400";
pub const HERO_ICON: &str = "w-10 h-10 sm:w-12 sm:h-12 md:w-14 md:h-14 lg:w-20 lg:h-20";
pub const HERO_SUBTITLE: &str = "text-base sm:text-lg md:text-xl text-white/70 max-w-md mx-auto px-2";
pub const GAME_AREA: &str = "relative z-10 flex flex-col items-center justify-center min-h-[300px]";
pub const FOOTER: &str = "absolute bottom-4 safe-area-bottom text-center text-white/40 text-sm";

pub const DNA_BUTTON: &str = "relative px-12 py-6 rounded-2xl text-xl font-bold bg-gradient-to-r from-violet-500 via-cyan-500 to-pink-500 text-white cursor-pointer disabled:cursor-not-allowed disabled:opacity-70 transition-transform duration-200";
pub const DNA_BUTTON_IDLE_MOTION: &str = "animate-pulse-glow hover:scale-105 active:scale-95";
pub const DNA_BUTTON_CONTENT: &str = "relative z-10 flex items-center gap-3";

pub const PROGRESS: &str = "flex flex-col items-center gap-6";
pub const PROGRESS_DOTS: &str = "flex gap-2";
pub const PROGRESS_DOT: &str = "w-2 h-2 rounded-full transition-colors duration-500";
pub const PROGRESS_MESSAGE: &str = "text-white/60 text-lg text-center animate-pulse";

pub const RESULT_CARD: &str = "relative rounded-3xl p-8 max-w-md w-full mx-4 text-center bg-white/10 backdrop-blur-lg border border-white/20 shadow-xl";
pub const RESULT_CARD_MOTION: &str = "animate-pop-in";
pub const RESULT_EMOJI: &str = "text-8xl mb-4";
pub const RESULT_KICKER: &str = "text-cyan-400 text-sm uppercase tracking-wider mb-2";
pub const RESULT_TITLE: &str = "text-3xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-violet-400 to-pink-400 mb-1";
pub const RESULT_SCIENTIFIC: &str = "text-white/50 text-sm italic mb-4";
pub const RESULT_FACT: &str = "text-white/80 text-lg mb-6";
pub const PLAY_AGAIN: &str = "px-8 py-3 rounded-xl bg-white/10 hover:bg-white/20 text-white font-medium transition-colors cursor-pointer";

pub const CONFETTI_LAYER: &str = "absolute inset-0 pointer-events-none";
pub const CONFETTI_PARTICLE: &str = "absolute text-2xl animate-confetti";

pub const SHARE_SECTION: &str = "space-y-4 mb-6";
pub const SHARE_HEADING: &str = "text-sm text-white/60 uppercase tracking-wider";
pub const SHARE_ROW: &str = "flex items-center justify-center gap-3 flex-wrap";
pub const SHARE_BUTTON: &str = "p-3 rounded-xl transition-all cursor-pointer";
pub const SHARE_BUTTON_MOTION: &str = "hover:scale-110 active:scale-95";
pub const SHARE_NATIVE: &str = "bg-gradient-to-r from-violet-500 to-cyan-500";
pub const SHARE_COPY: &str = "bg-white/10";

pub const BACKGROUND: &str = "fixed inset-0 -z-10 overflow-hidden pointer-events-none";
pub const BACKGROUND_GLYPH: &str = "absolute text-2xl opacity-20";

pub const ALERT_ERROR: &str = "bg-red-900/50 border border-red-800 rounded-lg p-4 text-red-200 max-w-md";
