use iced::Task;

use super::PointerWatchCtx;
use super::event::{PointerWatchEffect, PointerWatchEvent, PointerWatchIntent};
use super::model::dismissal;
use super::state::PointerWatchState;

/// Reduce pointer activity into menu dismissal effects.
pub(crate) fn reduce(
    state: &mut PointerWatchState,
    event: PointerWatchIntent,
    ctx: &PointerWatchCtx<'_>,
) -> Task<PointerWatchEvent> {
    match event {
        PointerWatchIntent::CursorMoved { position } => {
            state.set_cursor(Some(position));
            Task::none()
        },
        PointerWatchIntent::CursorLeft => {
            state.set_cursor(None);
            Task::none()
        },
        PointerWatchIntent::Pressed { position } => {
            if position.is_some() {
                state.set_cursor(position);
            }
            on_press(state, ctx)
        },
    }
}

fn on_press(
    state: &PointerWatchState,
    ctx: &PointerWatchCtx<'_>,
) -> Task<PointerWatchEvent> {
    let effects = press_effects(state, ctx);
    if effects.is_empty() {
        return Task::none();
    }

    log::debug!("outside press at {:?}: {effects:?}", state.cursor());
    Task::batch(
        effects
            .into_iter()
            .map(|effect| Task::done(PointerWatchEvent::Effect(effect))),
    )
}

fn press_effects(
    state: &PointerWatchState,
    ctx: &PointerWatchCtx<'_>,
) -> Vec<PointerWatchEffect> {
    let outcome = dismissal(ctx.open_menu, state.cursor(), ctx.regions);
    if outcome.is_empty() {
        return Vec::new();
    }

    let mut effects: Vec<PointerWatchEffect> = outcome
        .close
        .into_iter()
        .map(PointerWatchEffect::CloseMenu)
        .collect();
    if outcome.collapse_submenu && ctx.has_expanded_submenu {
        effects.push(PointerWatchEffect::CollapseSubmenu);
    }
    effects
}

#[cfg(test)]
mod tests {
    use iced::{Point, Rectangle, Size};

    use super::press_effects;
    use crate::widgets::navigation::MenuId;
    use crate::widgets::pointer_watch::model::MenuRegions;
    use crate::widgets::pointer_watch::state::PointerWatchState;
    use crate::widgets::pointer_watch::{
        PointerWatchCtx, PointerWatchEffect, PointerWatchIntent,
        PointerWatchWidget,
    };

    fn tools_regions() -> MenuRegions {
        let mut regions = MenuRegions::default();
        regions.insert(
            MenuId::Tools,
            Rectangle::new(Point::new(400.0, 0.0), Size::new(340.0, 300.0)),
        );
        regions
    }

    #[test]
    fn given_open_tools_with_submenu_when_pressed_outside_then_close_and_collapse()
     {
        let mut state = PointerWatchState::default();
        state.set_cursor(Some(Point::new(10.0, 500.0)));
        let regions = tools_regions();
        let ctx = PointerWatchCtx {
            open_menu: Some(MenuId::Tools),
            has_expanded_submenu: true,
            regions: &regions,
        };

        let effects = press_effects(&state, &ctx);

        assert!(matches!(
            effects.as_slice(),
            [
                PointerWatchEffect::CloseMenu(MenuId::Tools),
                PointerWatchEffect::CollapseSubmenu
            ]
        ));
    }

    #[test]
    fn given_no_open_menu_when_pressed_anywhere_then_no_effects_are_emitted() {
        let mut state = PointerWatchState::default();
        state.set_cursor(Some(Point::new(10.0, 500.0)));
        let regions = tools_regions();
        let ctx = PointerWatchCtx {
            open_menu: None,
            has_expanded_submenu: false,
            regions: &regions,
        };

        assert!(press_effects(&state, &ctx).is_empty());
    }

    #[test]
    fn given_open_tools_when_pressed_inside_then_no_effects_are_emitted() {
        let mut state = PointerWatchState::default();
        state.set_cursor(Some(Point::new(500.0, 100.0)));
        let regions = tools_regions();
        let ctx = PointerWatchCtx {
            open_menu: Some(MenuId::Tools),
            has_expanded_submenu: true,
            regions: &regions,
        };

        assert!(press_effects(&state, &ctx).is_empty());
    }

    #[test]
    fn given_cursor_moves_when_reduced_then_last_position_is_kept() {
        let mut widget = PointerWatchWidget::new();
        let regions = MenuRegions::default();
        let ctx = PointerWatchCtx {
            open_menu: None,
            has_expanded_submenu: false,
            regions: &regions,
        };

        let _task = widget.reduce(
            PointerWatchIntent::CursorMoved {
                position: Point::new(5.0, 6.0),
            },
            &ctx,
        );
        let _task = widget.reduce(
            PointerWatchIntent::CursorMoved {
                position: Point::new(50.0, 60.0),
            },
            &ctx,
        );

        assert_eq!(widget.cursor(), Some(Point::new(50.0, 60.0)));
    }

    #[test]
    fn given_touch_press_when_reduced_then_press_position_becomes_cursor() {
        let mut widget = PointerWatchWidget::new();
        let mut regions = MenuRegions::default();
        regions.insert(
            MenuId::Mobile,
            Rectangle::new(Point::new(0.0, 64.0), Size::new(400.0, 300.0)),
        );
        let ctx = PointerWatchCtx {
            open_menu: Some(MenuId::Mobile),
            has_expanded_submenu: true,
            regions: &regions,
        };

        let _task = widget.reduce(
            PointerWatchIntent::Pressed {
                position: Some(Point::new(20.0, 100.0)),
            },
            &ctx,
        );

        assert_eq!(widget.cursor(), Some(Point::new(20.0, 100.0)));
    }

    #[test]
    fn given_cursor_left_window_when_reduced_then_position_is_forgotten() {
        let mut widget = PointerWatchWidget::new();
        let regions = MenuRegions::default();
        let ctx = PointerWatchCtx {
            open_menu: None,
            has_expanded_submenu: false,
            regions: &regions,
        };
        let _task = widget.reduce(
            PointerWatchIntent::CursorMoved {
                position: Point::new(5.0, 6.0),
            },
            &ctx,
        );

        let _task = widget.reduce(PointerWatchIntent::CursorLeft, &ctx);

        assert_eq!(widget.cursor(), None);
    }
}
