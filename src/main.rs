//! Vault Lock entry point
//!
//! On the web the game starts from `platform::web`. Natively this runs a
//! headless demo: the autoplayer cracks the vault and the run is summarized.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use vault_lock::Settings;

    let settings = Settings::load();
    env_logger::Builder::new()
        .filter_level(settings.log_level_filter())
        .parse_default_env()
        .init();
    log::info!("Vault Lock (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    let summary = demo::run(&settings);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use serde::Serialize;

    use vault_lock::autoplay::Autoplayer;
    use vault_lock::sim::{Combination, VaultPhase};
    use vault_lock::{Settings, VaultController, VaultObserver};

    /// Give up after this much game time
    const DEMO_LIMIT_SECS: f32 = 120.0;

    #[derive(Default)]
    struct Counter {
        resets: u32,
        opens: u32,
    }

    impl VaultObserver for Counter {
        fn on_reset(&mut self) {
            self.resets += 1;
            log::info!("Door closed, handle spinning back");
        }

        fn on_vault_open(&mut self) {
            self.opens += 1;
            log::info!("Door open!");
        }
    }

    #[derive(Debug, Serialize)]
    pub struct Summary {
        seed: u64,
        combination: Combination,
        opened: bool,
        solve_secs: f32,
        auto_reset: bool,
        final_angle: f64,
    }

    pub fn run(settings: &Settings) -> Summary {
        let seed = settings.seed.unwrap_or_else(vault_lock::platform::random_seed);
        let mut controller = VaultController::new(settings, seed, Counter::default());
        let combination = controller.state().target.clone();
        let mut player = Autoplayer::new();

        let dt = settings.sim_dt();
        let mut solve_secs = 0.0;
        let mut time = 0.0;
        while time < DEMO_LIMIT_SECS && controller.observer().resets == 0 {
            if let Some(direction) = player.next_click(controller.state()) {
                controller.press(direction);
            }
            controller.step(dt);
            time += dt;

            if controller.phase() == VaultPhase::Open && solve_secs == 0.0 {
                solve_secs = controller.cycle_elapsed();
            }
        }

        let counter = controller.observer();
        Summary {
            seed,
            combination,
            opened: counter.opens > 0,
            solve_secs,
            auto_reset: counter.resets > 0,
            final_angle: controller.handle_angle(),
        }
    }
}
