use libcolor::Color;
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Scancode,
    pixels,
    rect::Rect,
    render::WindowCanvas,
};

use crate::{
    config::Config,
    dismiss::{Dismissal, Input, Key},
    layout::Layout,
};

/// Keys are identified by scancode only. Events without one are ignored.
fn key(scancode: Option<Scancode>) -> Option<Key> {
    match scancode? {
        Scancode::Escape => Some(Key::Escape),
        other => Some(Key::Other(other as i32)),
    }
}

fn input(event: &Event) -> Option<Input> {
    match *event {
        Event::Quit { .. }
        | Event::Window {
            win_event: WindowEvent::Close,
            ..
        } => Some(Input::CloseRequested),
        Event::KeyDown { scancode, .. } => key(scancode).map(Input::KeyDown),
        Event::KeyUp { scancode, .. } => key(scancode).map(Input::KeyUp),
        _ => None,
    }
}

fn draw(canvas: &mut WindowCanvas, layout: &Layout, color: Color) -> Result<(), anyhow::Error> {
    let (r, g, b) = color.rgb();

    canvas.set_draw_color(pixels::Color::RGB(0, 0, 0));
    canvas.clear();

    canvas.set_draw_color(pixels::Color::RGB(r, g, b));
    canvas
        .fill_rect(Rect::new(0, 0, layout.swatch_size, layout.swatch_size))
        .map_err(anyhow::Error::msg)?;

    let caption: Vec<Rect> = layout
        .caption(&color.label().to_string())
        .iter()
        .map(|cell| Rect::new(cell.x, cell.y, cell.size, cell.size))
        .collect();
    canvas.set_draw_color(pixels::Color::RGB(255, 255, 255));
    canvas.fill_rects(&caption).map_err(anyhow::Error::msg)?;

    canvas.present();
    Ok(())
}

/// Open a window showing `color` and block until it is dismissed.
pub fn show(color: Color, config: &Config, noclose: bool) -> Result<(), anyhow::Error> {
    let layout = Layout::new(config);

    let sdl_context = sdl2::init().map_err(anyhow::Error::msg)?;
    let sdl_video_subsystem = sdl_context.video().map_err(anyhow::Error::msg)?;
    let sdl_window = sdl_video_subsystem
        .window(&config.title, layout.width, layout.height)
        .position_centered()
        .build()?;
    let mut canvas = sdl_window.into_canvas().build()?;
    let mut sdl_event_pump = sdl_context.event_pump().map_err(anyhow::Error::msg)?;
    log::info!(
        "showing {} in a {}x{} window",
        color.hex(),
        layout.width,
        layout.height
    );

    let mut dismissal = Dismissal::new(noclose);
    draw(&mut canvas, &layout, color)?;
    loop {
        let event = sdl_event_pump.wait_event();
        if let Event::Window {
            win_event: WindowEvent::Exposed,
            ..
        } = event
        {
            draw(&mut canvas, &layout, color)?;
            continue;
        }

        if let Some(input) = input(&event) {
            if dismissal.should_close(input) {
                log::info!("window dismissed by {:?}", input);
                return Ok(());
            }
        }
    }
}
