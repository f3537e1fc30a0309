// Allocation tracking: every byte the framebuffer and its texture take must
// come back once they are released. Counters are per thread so tests running
// side by side don't see each other's allocations.

use pixel_grid::draw::{draw_grid, draw_rect};
use pixel_grid::{App, Config, Error, FrameBuffer, HeadlessScreen, InputEvent, RenderTarget, Texture};
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

struct Counting;

thread_local! {
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
}

fn track(delta: isize) {
    let _ = LIVE_BYTES.try_with(|c| c.set(c.get() + delta));
}

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            track(layout.size() as isize);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        track(-(layout.size() as isize));
    }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

fn live_bytes() -> isize {
    LIVE_BYTES.with(Cell::get)
}

#[test]
fn create_then_destroy_releases_pixels_and_texture() {
    let mut screen = HeadlessScreen::new(800, 600);
    let before = live_bytes();

    let mut fb = FrameBuffer::create(800, 600, &mut screen).unwrap();
    let cells = (800 * 600 * 4) as isize;
    assert!(live_bytes() - before >= 2 * cells, "pixels + texture should be live");

    fb.clear(0xFF00_0000);
    draw_grid(&mut fb, 30, 0xFF33_3333);
    draw_rect(&mut fb, 100, 75, 50, 50, 0xFFFF_00FF);
    fb.destroy();

    assert_eq!(live_bytes(), before);
}

#[test]
fn full_run_returns_every_allocation() {
    let before = live_bytes();
    {
        let config = Config { width: 64, height: 48, ..Config::default() };
        let mut app = App::setup(config, HeadlessScreen::new(64, 48)).unwrap();
        for _ in 0..5 {
            app.frame().unwrap();
        }
        let target = app.shutdown();
        assert_eq!(target.frames_presented(), 5);
    }
    assert_eq!(live_bytes(), before);
}

thread_local! {
    static LIVE_AT_TARGET_DROP: Cell<Option<isize>> = const { Cell::new(None) };
}

/// Render target that notes how many bytes were still live when it went away.
struct DropWatch(HeadlessScreen);

impl Drop for DropWatch {
    fn drop(&mut self) {
        LIVE_AT_TARGET_DROP.with(|c| c.set(Some(live_bytes())));
    }
}

impl RenderTarget for DropWatch {
    fn create_streaming_texture(&mut self, width: usize, height: usize) -> Result<Texture, Error> {
        self.0.create_streaming_texture(width, height)
    }

    fn present(&mut self, texture: &Texture) -> Result<(), Error> {
        self.0.present(texture)
    }

    fn poll_input(&mut self) -> Vec<InputEvent> {
        self.0.poll_input()
    }
}

#[test]
fn dropping_the_app_frees_the_framebuffer_before_the_target() {
    let config = Config { width: 32, height: 32, ..Config::default() };
    let target = DropWatch(HeadlessScreen::new(32, 32));
    let baseline = live_bytes();

    let app = App::setup(config, target).unwrap();
    assert!(live_bytes() - baseline >= 2 * 32 * 32 * 4);
    // Error path in a frame loop: the app is dropped, not shut down.
    drop(app);

    let at_drop = LIVE_AT_TARGET_DROP.with(Cell::get).expect("target dropped");
    assert!(at_drop <= baseline, "framebuffer still live when target dropped");
}
