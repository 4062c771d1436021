#![no_main]

use std::sync::{Arc, OnceLock};

use execution::{encode_to_vec, Execution};
use libfuzzer_sys::fuzz_target;
use locale::{Host, PlatformProfile};
use textcore::ReplacementHandler;

const LOCALES: [&str; 4] = ["C", "de_DE", "English_United States.1252", "en_US.UTF-8"];

fn host(wide: bool) -> Arc<Host> {
    static POSIX: OnceLock<Arc<Host>> = OnceLock::new();
    static WINDOWS: OnceLock<Arc<Host>> = OnceLock::new();
    let (cell, profile) = if wide {
        (&WINDOWS, PlatformProfile::windows())
    } else {
        (&POSIX, PlatformProfile::posix())
    };
    Arc::clone(cell.get_or_init(|| Arc::new(Host::new(profile))))
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    let exec = Execution::with_host(host(selector & 0x80 != 0));
    exec.host()
        .set_locale(LOCALES[usize::from(selector) % LOCALES.len()])
        .unwrap();

    // Replacement always makes progress, so encoding must succeed.
    let bytes = encode_to_vec(&exec, text, &mut ReplacementHandler).unwrap();
    assert!(bytes.len() >= text.chars().count());
});
