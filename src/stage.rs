//! Element registry. Lookup by selector returns an `Option`; a missing
//! element is an expected outcome that callers handle by skipping, not
//! an error.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub x: f32,
    pub y: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            x: 0.0,
            y: 0.0,
        }
    }
}

/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

#[derive(Debug)]
struct Element {
    selector: String,
    parent: Option<ElementId>,
    rect: Rect,
    transform: Transform,
}

#[derive(Debug, Default)]
pub struct Stage {
    elements: Vec<Element>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, selector: &str, parent: Option<ElementId>, rect: Rect) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element {
            selector: selector.to_string(),
            parent,
            rect,
            transform: Transform::default(),
        });
        id
    }

    pub fn query(&self, selector: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| e.selector == selector)
            .map(ElementId)
    }

    /// Scoped lookup: only matches descendants of `root`.
    pub fn query_within(&self, root: ElementId, selector: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .find(|(i, e)| e.selector == selector && self.is_descendant_of(ElementId(*i), root))
            .map(|(i, _)| ElementId(i))
    }

    fn is_descendant_of(&self, id: ElementId, root: ElementId) -> bool {
        let mut cur = self.elements[id.0].parent;
        while let Some(p) = cur {
            if p == root {
                return true;
            }
            cur = self.elements[p.0].parent;
        }
        false
    }

    pub fn rect(&self, id: ElementId) -> Rect {
        self.elements[id.0].rect
    }

    pub fn set_rect(&mut self, id: ElementId, rect: Rect) {
        self.elements[id.0].rect = rect;
    }

    pub fn transform(&self, id: ElementId) -> Transform {
        self.elements[id.0].transform
    }

    pub fn transform_mut(&mut self, id: ElementId) -> &mut Transform {
        &mut self.elements[id.0].transform
    }

    pub fn clear_transform(&mut self, id: ElementId) {
        self.elements[id.0].transform = Transform::default();
    }

    pub fn selector(&self, id: ElementId) -> &str {
        &self.elements[id.0].selector
    }
}
