use decorate_core::{decorate, InvalidComponent, ObjectRef, Variant};
use decorate_text::{Bold, Text};

/// A benchmark input: how many decorator layers sit above the text.
#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    depth: usize,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, depth: usize) -> Self {
        Self { name, group, depth }
    }

    /// every layer forwards without overriding
    pub fn pass_through(name: &'static str, depth: usize) -> Self {
        Self::new(name, TestGroup::PassThrough, depth)
    }

    /// every layer overrides `draw` and calls through
    pub fn markup(name: &'static str, depth: usize) -> Self {
        Self::new(name, TestGroup::Markup, depth)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Builds the decorated text for this case.
    pub fn build(&self) -> Result<ObjectRef, InvalidComponent> {
        let mut text = ObjectRef::new(Text::new("Hello World"));
        for _ in 0..self.depth {
            text = match self.group {
                TestGroup::PassThrough => decorate::<PassThrough>(text)?,
                TestGroup::Markup => decorate::<Bold>(text)?,
            };
        }
        Ok(text)
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    PassThrough,
    Markup,
}

/// A decorator that overrides nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;

impl Variant for PassThrough {
    const NAME: &'static str = "PassThrough";
}
