pub mod accuracy_ops;
pub mod config_ops;
pub mod convert_ops;

use std::path::Path;
use std::sync::Arc;

use ipa_engine::IpaEngine;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
pub(crate) use die;

/// Build an engine from optional config files, exiting on error.
pub(crate) fn open_engine(lexicon: Option<&str>, settings: Option<&str>) -> Arc<IpaEngine> {
    die!(
        IpaEngine::open(lexicon.map(Path::new), settings.map(Path::new)),
        "Error loading configuration: {}"
    )
}
