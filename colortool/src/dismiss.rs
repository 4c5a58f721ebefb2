/// Keyboard and window-manager input, independent of the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    KeyDown(Key),
    KeyUp(Key),
    CloseRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other(i32),
}

/// Decides when the swatch window goes away.
///
/// Normally any key pressed and released inside the window closes it. A
/// release without a matching press (say, the Enter that launched us from a
/// terminal) is ignored. With `noclose` only Escape closes the window. A
/// close request from the window manager is always honored.
pub struct Dismissal {
    noclose: bool,
    held: Vec<Key>,
}

impl Dismissal {
    pub fn new(noclose: bool) -> Dismissal {
        Dismissal {
            noclose,
            held: Vec::new(),
        }
    }

    pub fn should_close(&mut self, input: Input) -> bool {
        match input {
            Input::CloseRequested => true,
            Input::KeyDown(key) => {
                if !self.held.contains(&key) {
                    self.held.push(key);
                }
                false
            }
            Input::KeyUp(key) => {
                let was_held = self.held.contains(&key);
                self.held.retain(|k| *k != key);
                if self.noclose {
                    key == Key::Escape
                } else {
                    was_held
                }
            }
        }
    }
}
