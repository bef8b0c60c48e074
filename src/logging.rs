use ::log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::sync::Once;

static INIT: Once = Once::new();

/// Routes `log` output to stderr at the given level. Safe to call more than
/// once; only the first call installs the logger.
pub fn init_logging(level: LevelFilter) {
    INIT.call_once(|| {
        let stderr = ConsoleAppender::builder()
            .target(log4rs::append::console::Target::Stderr)
            .encoder(Box::new(PatternEncoder::new("{h({l})} {m}{n}")))
            .build();
        let config = Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(level))
            .expect("console logging configuration is valid");
        log4rs::init_config(config).expect("no logger installed yet");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_logging(LevelFilter::Info);
        init_logging(LevelFilter::Trace);
    }
}
