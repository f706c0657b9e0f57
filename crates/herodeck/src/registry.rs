use anyhow::Result;

/// One entry of the slide registry.
///
/// `R` is the render unit. The application stores a function pointer here;
/// tests get away with `()`.
#[derive(Debug, Clone)]
pub struct SlideDescriptor<R> {
    pub id: String,
    pub title: String,
    pub render: R,
}

impl<R> SlideDescriptor<R> {
    pub fn new(id: impl Into<String>, title: impl Into<String>, render: R) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            render,
        }
    }
}

/// Ordered, immutable, non-empty list of slides.
///
/// Slides are identified by position. The `id` field is metadata and may
/// repeat.
#[derive(Debug, Clone)]
pub struct SlideRegistry<R> {
    slides: Vec<SlideDescriptor<R>>,
}

impl<R> SlideRegistry<R> {
    pub fn new(slides: Vec<SlideDescriptor<R>>) -> Result<Self> {
        if slides.is_empty() {
            anyhow::bail!("A presentation needs at least one slide");
        }
        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn get(&self, index: usize) -> Option<&SlideDescriptor<R>> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideDescriptor<R>> {
        self.slides.iter()
    }

    /// Index of the first slide carrying `id`.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }

    /// Ids used by more than one slide, in order of first appearance.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut dups: Vec<&str> = Vec::new();
        for (i, slide) in self.slides.iter().enumerate() {
            let id = slide.id.as_str();
            if dups.contains(&id) {
                continue;
            }
            if self.slides[i + 1..].iter().any(|s| s.id == id) {
                dups.push(id);
            }
        }
        dups
    }
}

impl<R> std::ops::Index<usize> for SlideRegistry<R> {
    type Output = SlideDescriptor<R>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slides[index]
    }
}
