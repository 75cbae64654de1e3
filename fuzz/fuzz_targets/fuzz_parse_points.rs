#![no_main]

use libfuzzer_sys::fuzz_target;
use paddock::presentation::create_memory_engines;
use paddock::{AccountToken, ActingAccount, EngineSettings, FenceDraft, PaddockError, Role};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(points) = paddock::parse_points(content) {
            let area = paddock::area(&points);
            assert!(!(area < 0.0));
            if points.len() < 3 {
                assert_eq!(area, 0.0);
                return;
            }

            let engines = create_memory_engines(EngineSettings::default());
            let owner = AccountToken::new("u1");
            if engines.accounts.register(&owner, Role::Farmer, None).is_err() {
                return;
            }
            let created = engines
                .fences
                .create(&ActingAccount::farmer("u1"), &FenceDraft::new("", points));
            match created {
                Ok(creation) => {
                    assert!(area.is_finite());
                    assert!(creation.fence.area.is_finite());
                }
                Err(err) => {
                    assert!(!area.is_finite());
                    assert!(matches!(err, PaddockError::InvalidInput(_)));
                }
            }
        }
    }
});
