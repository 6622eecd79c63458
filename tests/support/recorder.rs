use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use ninekey::{CaseMode, Family, Mode, Renderer, View};

/// Collects every string a callback was invoked with.
#[derive(Default, Clone)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends its argument to this log.
    pub fn callback(&self) -> impl FnMut(&str) + 'static {
        let calls = Rc::clone(&self.calls);
        move |text: &str| calls.borrow_mut().push(text.to_string())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }
}

/// What a renderer was shown on one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub case: CaseMode,
    pub family: Family,
    pub mode: Mode,
    pub labels: Vec<String>,
    pub hints: bool,
}

/// Renderer that keeps a copy of every view it was asked to draw.
#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Frame>,
}

impl Renderer for RecordingRenderer {
    type Error = Infallible;

    fn render(&mut self, view: &View<'_>) -> Result<(), Infallible> {
        self.frames.push(Frame {
            text: view.snapshot.text.to_string(),
            case: view.snapshot.case,
            family: view.snapshot.family,
            mode: view.snapshot.mode,
            labels: ninekey::Direction::ALL
                .iter()
                .map(|d| view.bindings.label(*d).to_string())
                .collect(),
            hints: view.hints,
        });
        Ok(())
    }
}
