/// Enclosing-construct tag consulted by sub-parsers when choosing
/// terminators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ContextTag {
    ObjectKey,
    ObjectValue,
    Array,
}

/// Stack of enclosing-construct tags. Pushes and pops pair up across every
/// complete object/array/value traversal; the stack is empty immediately
/// before and after a top-level parse.
#[derive(Debug, Default)]
pub(crate) struct ContextStack {
    tags: Vec<ContextTag>,
}

impl ContextStack {
    pub(crate) fn push(&mut self, tag: ContextTag) {
        self.tags.push(tag);
    }

    pub(crate) fn pop(&mut self) {
        self.tags.pop();
    }

    pub(crate) fn clear(&mut self) {
        self.tags.clear();
    }

    pub(crate) fn current(&self) -> Option<ContextTag> {
        self.tags.last().copied()
    }

    pub(crate) fn contains(&self, tag: ContextTag) -> bool {
        self.tags.contains(&tag)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
