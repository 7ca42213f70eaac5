pub mod runner;

pub use runner::EffectRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wisp_engine::TrailConfig;

thread_local! {
    static RUNNER: RefCell<Option<EffectRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut EffectRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Effect not initialized. Call effect_init() first.");
        f(runner)
    })
}

fn seed_from_clock() -> u64 {
    js_sys::Date::now().to_bits()
}

fn window_size() -> Option<(f32, f32)> {
    let win = web_sys::window()?;
    let w = win.inner_width().ok()?.as_f64()?;
    let h = win.inner_height().ok()?.as_f64()?;
    Some((w as f32, h as f32))
}

/// Create the effect for a canvas of the given size. Non-positive dimensions
/// fall back to the window's inner size.
#[wasm_bindgen]
pub fn effect_init(width: f32, height: f32) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let (width, height) = if width > 0.0 && height > 0.0 {
        (width, height)
    } else {
        window_size().unwrap_or((800.0, 600.0))
    };

    let runner = EffectRunner::new(TrailConfig::default(), width, height, seed_from_clock());

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("wisp: initialized at {}x{}", width, height);
}

/// Replace the config from a JSON string. Invalid JSON is logged and the
/// current config kept.
#[wasm_bindgen]
pub fn effect_load_config(json: &str) {
    match TrailConfig::from_json(json) {
        Ok(config) => with_runner(|r| r.reconfigure(config, seed_from_clock())),
        Err(err) => log::warn!("wisp: ignoring invalid config: {}", err),
    }
}

/// Advance one animation frame. `dt` in seconds since the previous frame.
#[wasm_bindgen]
pub fn effect_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

/// The canvas was resized; the bounce boundary follows.
#[wasm_bindgen]
pub fn effect_resize(width: f32, height: f32) {
    with_runner(|r| r.resize(width, height));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_line_vertices_ptr() -> *const f32 {
    with_runner(|r| r.line_vertices_ptr())
}

#[wasm_bindgen]
pub fn get_line_vertex_count() -> u32 {
    with_runner(|r| r.line_vertex_count())
}

#[wasm_bindgen]
pub fn get_max_particles() -> u32 {
    with_runner(|r| r.max_particles())
}

/// Path of the shared particle texture the host must pre-load.
#[wasm_bindgen]
pub fn get_texture_path() -> String {
    with_runner(|r| r.texture_path())
}
