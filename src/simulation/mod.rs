mod signal;

pub use signal::{eeg_like_frame, sine_frame, sine_signal};
