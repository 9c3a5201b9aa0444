mod listing;
mod source;

pub use source::{File, Span};

use codespan_reporting::diagnostic::Diagnostic;

#[derive(Debug, Default)]
pub struct Messages {
    pub msgs: Vec<Diagnostic<File>>,
}

impl Messages {
    pub fn new() -> Self {
        Self { msgs: Vec::new() }
    }

    #[must_use]
    pub fn at(&mut self, span: Span) -> MessageAdder {
        MessageAdder {
            msgs: self,
            at: span,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.msgs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.msgs.len()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.msgs.iter().filter_map(|msg| msg.code.as_deref())
    }
}

#[derive(Debug)]
pub struct MessageAdder<'a> {
    msgs: &'a mut Messages,
    at: Span,
}

impl<'a> MessageAdder<'a> {
    fn add(&mut self, diag: Diagnostic<File>) {
        self.msgs.msgs.push(diag);
    }
}
