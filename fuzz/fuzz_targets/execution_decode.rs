#![no_main]

use std::sync::{Arc, OnceLock};

use execution::{Execution, Strategy};
use libfuzzer_sys::fuzz_target;
use locale::{Host, PlatformProfile};
use textcore::{Encoding, ReplacementHandler};

const LOCALES: [&str; 4] = ["C", "de_DE", "English_United States.1252", "en_US.UTF-8"];
const STRATEGIES: [Strategy; 3] = [
    Strategy::FastUtf8,
    Strategy::WideBridge,
    Strategy::DirectNarrow,
];

fn host() -> Arc<Host> {
    static HOST: OnceLock<Arc<Host>> = OnceLock::new();
    Arc::clone(HOST.get_or_init(|| Arc::new(Host::new(PlatformProfile::posix()))))
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, mut input)) = data.split_first() else {
        return;
    };
    let exec = Execution::with_host(host());
    exec.host()
        .set_locale(LOCALES[usize::from(selector) % LOCALES.len()])
        .unwrap();
    let strategy = STRATEGIES[usize::from(selector >> 4) % STRATEGIES.len()];

    let mut state = exec.decode_state();
    let mut out = ['\0'; 8];
    // Every step must consume input or produce output.
    while !input.is_empty() {
        let result =
            exec.decode_one_with(strategy, input, &mut out, &mut ReplacementHandler, &mut state);
        let written = out.len() - result.output.len();
        let rest = result.input;
        assert!(rest.len() < input.len() || written > 0);
        input = rest;
    }
    let _ = exec.drain_one(&mut out, &mut ReplacementHandler, &mut state);
});
