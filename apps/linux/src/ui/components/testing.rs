//! Widget tree helpers for component tests

use iced::advanced::layout::{self, Layout};
use iced::advanced::widget::{self, operation::Focusable, Operation, Tree};
use iced::{Element, Rectangle, Size, Theme};

/// Records the id of every focusable widget, in tree order
#[derive(Debug, Default)]
struct FocusableIds {
    ids: Vec<Option<widget::Id>>,
}

impl Operation for FocusableIds {
    fn container(
        &mut self,
        _id: Option<&widget::Id>,
        _bounds: Rectangle,
        operate_on_children: &mut dyn FnMut(&mut dyn Operation),
    ) {
        operate_on_children(self);
    }

    fn focusable(&mut self, _state: &mut dyn Focusable, id: Option<&widget::Id>) {
        self.ids.push(id.cloned());
    }
}

/// Lay out `element` with the null renderer and collect its focusable ids
pub fn focusable_ids<Message>(element: &Element<'_, Message, Theme, ()>) -> Vec<Option<widget::Id>> {
    let widget = element.as_widget();
    let mut tree = Tree::new(widget);
    let limits = layout::Limits::new(Size::ZERO, Size::new(320.0, 48.0));
    let node = widget.layout(&mut tree, &(), &limits);

    let mut collector = FocusableIds::default();
    widget.operate(&mut tree, Layout::new(&node), &(), &mut collector);
    collector.ids
}
