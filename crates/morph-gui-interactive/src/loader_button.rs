//! Loader button
//!
//! A tappable button that can morph into a round loading indicator. Going to
//! the loading state fades the title out, rounds the corners to a pill and
//! collapses the width to a circle before the spinner starts. Going back plays
//! the same steps in reverse.

use crate::blink::Blink;
use crate::morph::{LoadingState, MorphSequence, MorphStep, MorphTarget, StepOutcome};
use crate::spinner::{Spinner, SpinnerStyle};
use morph_gui::{
    css, ease_in_out, ease_out, was_tapped, AnimatedProperty, Color, Control, ControlId, Image,
    Interactive, Layer, LayerContent, LayerId, PropertyAnimation, Rect, Shadow, TargetedEvent,
    Transition,
};
use std::time::Duration;

/// Visual styling for a loader button
#[derive(Debug, Clone)]
pub struct LoaderButtonStyle {
    /// Background color when enabled
    pub enabled_color: Color,
    /// Background color when disabled
    pub disabled_color: Color,
    /// Spinner color while loading
    pub loader_color: Color,
    /// Corner radius in the normal state
    pub corner_radius: f32,
    /// Title text color
    pub title_color: Color,
    /// Title font size in logical pixels
    pub font_size: f32,
    /// Drop shadow under the background, `None` to draw none
    pub shadow: Option<Shadow>,
    /// Keep taking taps while visually disabled
    pub access_when_disabled: bool,

    /// Title opacity change at the start and end of a morph
    pub title_fade: Transition,
    /// Corner radius change between the configured radius and a circle
    pub corner_morph: Transition,
    /// Width change between the normal width and the height
    pub width_morph: Transition,
}

impl Default for LoaderButtonStyle {
    fn default() -> Self {
        Self {
            enabled_color: Color::srgb_f32(0.12, 0.69, 0.11),
            disabled_color: css::DARK_GRAY,
            loader_color: css::DARK_GRAY,
            corner_radius: 10.0,
            title_color: css::WHITE,
            font_size: 18.0,
            shadow: Some(Shadow::default()),
            access_when_disabled: false,
            title_fade: Transition::new(0.1, ease_out),
            corner_morph: Transition::new(0.5, ease_in_out),
            width_morph: Transition::new(0.3, ease_in_out),
        }
    }
}

impl LoaderButtonStyle {
    pub fn with_enabled_color(mut self, color: Color) -> Self {
        self.enabled_color = color;
        self
    }

    pub fn with_disabled_color(mut self, color: Color) -> Self {
        self.disabled_color = color;
        self
    }

    pub fn with_loader_color(mut self, color: Color) -> Self {
        self.loader_color = color;
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_shadow(mut self, shadow: Option<Shadow>) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn with_access_when_disabled(mut self, access: bool) -> Self {
        self.access_when_disabled = access;
        self
    }

    pub fn with_title_fade(mut self, transition: Transition) -> Self {
        self.title_fade = transition;
        self
    }

    pub fn with_corner_morph(mut self, transition: Transition) -> Self {
        self.corner_morph = transition;
        self
    }

    pub fn with_width_morph(mut self, transition: Transition) -> Self {
        self.width_morph = transition;
        self
    }

    /// Every morph step runs instantly
    pub fn without_animations(self) -> Self {
        self.with_title_fade(Transition::instant())
            .with_corner_morph(Transition::instant())
            .with_width_morph(Transition::instant())
    }
}

/// Button that morphs into a spinner while loading
///
/// Call [`LoaderButton::update`] once per frame; morph steps only advance
/// from there.
pub struct LoaderButton {
    control: Control,
    layer: Layer,
    title_id: LayerId,
    style: LoaderButtonStyle,
    /// The value last passed to `set_enabled`
    appears_enabled: bool,
    /// Last settled state
    state: LoadingState,
    /// Requested state
    target: LoadingState,
    normal_frame: Rect,
    morph: Option<MorphSequence>,
    spinner: Option<Spinner>,
}

impl LoaderButton {
    pub fn new(id: impl Into<ControlId>, frame: Rect) -> Self {
        let control = Control::new(id, frame);
        let style = LoaderButtonStyle::default();

        let mut layer = Layer::new(control.id().as_str(), frame)
            .with_background(style.enabled_color)
            .with_corner_radius(style.corner_radius);
        layer.set_shadow(style.shadow);

        let title_id = LayerId::new(format!("{}_title", control.id().as_str()));
        layer.add_sublayer(Layer::new(title_id.clone(), frame).with_content(
            LayerContent::Text {
                text: String::new(),
                font_size: style.font_size,
                color: style.title_color,
            },
        ));

        Self {
            control,
            layer,
            title_id,
            style,
            appears_enabled: true,
            state: LoadingState::Normal,
            target: LoadingState::Normal,
            normal_frame: frame,
            morph: None,
            spinner: None,
        }
    }

    pub fn with_style(mut self, style: LoaderButtonStyle) -> Self {
        self.style = style;
        self.apply_style();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    pub fn id(&self) -> &ControlId {
        self.control.id()
    }

    pub fn style(&self) -> &LoaderButtonStyle {
        &self.style
    }

    pub fn title(&self) -> &str {
        match self.layer.find(&self.title_id).map(Layer::content) {
            Some(LayerContent::Text { text, .. }) => text.as_str(),
            _ => "",
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        if let Some(LayerContent::Text { text, .. }) = self
            .layer
            .find_mut(&self.title_id)
            .map(Layer::content_mut)
        {
            *text = title.into();
        }
    }

    // Style properties

    pub fn enabled_color(&self) -> Color {
        self.style.enabled_color
    }

    pub fn set_enabled_color(&mut self, color: Color) {
        self.style.enabled_color = color;
        self.apply_background();
    }

    pub fn disabled_color(&self) -> Color {
        self.style.disabled_color
    }

    pub fn set_disabled_color(&mut self, color: Color) {
        self.style.disabled_color = color;
        self.apply_background();
    }

    pub fn corner_radius(&self) -> f32 {
        self.style.corner_radius
    }

    /// Takes effect immediately in the normal state, otherwise once the
    /// button is back to normal
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.style.corner_radius = radius;
        if self.state == LoadingState::Normal && self.morph.is_none() {
            self.layer.set_corner_radius(radius);
        }
    }

    pub fn loader_color(&self) -> Color {
        self.style.loader_color
    }

    pub fn set_loader_color(&mut self, color: Color) {
        self.style.loader_color = color;
        if let Some(spinner) = &mut self.spinner {
            spinner.set_color(&mut self.layer, color);
        }
    }

    pub fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.style.shadow = shadow;
        self.layer.set_shadow(shadow);
    }

    pub fn set_access_when_disabled(&mut self, access: bool) {
        self.style.access_when_disabled = access;
        self.apply_enabled();
    }

    // Enabled state

    /// Swap the background for the state; enabling also plays a blink
    pub fn set_enabled(&mut self, enabled: bool) {
        log::debug!("{:?} enabled: {}", self.control.id(), enabled);
        self.appears_enabled = enabled;
        self.apply_enabled();
        self.apply_background();
        if enabled {
            self.layer.blink();
        }
    }

    /// Whether taps are accepted, which also holds while visually disabled
    /// when `access_when_disabled` is set
    pub fn is_enabled(&self) -> bool {
        self.control.is_enabled()
    }

    /// The value last passed to [`LoaderButton::set_enabled`]
    pub fn appears_enabled(&self) -> bool {
        self.appears_enabled
    }

    // Loading state

    /// Whether loading is the requested state
    ///
    /// Flips as soon as `start_loading`/`stop_loading` is called, while the
    /// morph may still be running. See [`LoaderButton::loading_state`] for
    /// the settled state.
    pub fn is_loading(&self) -> bool {
        self.target == LoadingState::Loading
    }

    pub fn loading_state(&self) -> LoadingState {
        self.state
    }

    pub fn is_morphing(&self) -> bool {
        self.morph.is_some()
    }

    /// Whether the spinner is shown and rotating
    pub fn is_spinning(&self) -> bool {
        self.spinner
            .as_ref()
            .is_some_and(|s| s.is_animating(&self.layer))
    }

    pub fn start_loading(&mut self) {
        self.request(LoadingState::Loading);
    }

    pub fn stop_loading(&mut self) {
        self.request(LoadingState::Normal);
    }

    fn request(&mut self, target: LoadingState) {
        if target == self.target {
            log::trace!("{:?} already heading to {:?}", self.control.id(), target);
            return;
        }
        self.target = target;

        if self.morph.is_some() {
            log::debug!("{:?} queued {:?} until morph settles", self.control.id(), target);
            return;
        }
        self.begin_morph(target);
    }

    fn begin_morph(&mut self, target: LoadingState) {
        log::debug!("{:?} morphing to {:?}", self.control.id(), target);
        self.control.set_user_interaction_enabled(false);

        let mut morph = MorphSequence::new(target);
        if morph.advance(self, &[]) {
            self.settle(target);
        } else {
            self.morph = Some(morph);
        }
    }

    fn settle(&mut self, reached: LoadingState) {
        self.state = reached;
        self.layout();

        if self.target != reached {
            self.begin_morph(self.target);
            return;
        }

        log::debug!("{:?} settled in {:?}", self.control.id(), reached);
        self.control
            .set_user_interaction_enabled(reached == LoadingState::Normal);
    }

    /// Advance animations and any running morph by `dt`
    pub fn update(&mut self, dt: Duration) {
        let finished = self.layer.tick(dt);

        if let Some(mut morph) = self.morph.take() {
            if morph.advance(self, &finished) {
                self.settle(morph.target());
            } else {
                self.morph = Some(morph);
            }
        }
    }

    // Events

    /// Subscribe to taps
    pub fn on_tap(&mut self, f: impl FnMut(&ControlId) + 'static) {
        self.control.on_tap(f);
    }

    /// Returns `true` when the event was a tap on this button
    pub fn handle_event(&mut self, event: &TargetedEvent) -> bool {
        self.control.handle_event(event)
    }

    pub fn is_highlighted(&self) -> bool {
        self.control.is_highlighted()
    }

    // Geometry and output

    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    /// Current model frame, collapsed while loading
    pub fn frame(&self) -> Rect {
        self.layer.frame()
    }

    /// Frame of the button in the normal state
    pub fn normal_frame(&self) -> Rect {
        self.normal_frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.normal_frame = frame;
        if self.morph.is_none() {
            self.layout();
        }
    }

    /// Solid image of the current background, sized to the frame
    pub fn background_image(&self) -> Option<Image> {
        let frame = self.layer.frame();
        Image::from_color(
            self.layer.background(),
            [frame.width().round() as u32, frame.height().round() as u32],
        )
    }

    fn apply_style(&mut self) {
        self.apply_enabled();
        self.apply_background();
        self.layer.set_shadow(self.style.shadow);

        let (title_color, font_size) = (self.style.title_color, self.style.font_size);
        if let Some(LayerContent::Text {
            color, font_size: size, ..
        }) = self
            .layer
            .find_mut(&self.title_id)
            .map(Layer::content_mut)
        {
            *color = title_color;
            *size = font_size;
        }

        let loader_color = self.style.loader_color;
        if let Some(spinner) = &mut self.spinner {
            spinner.set_color(&mut self.layer, loader_color);
        }

        if self.morph.is_none() {
            self.layout();
        }
    }

    fn apply_enabled(&mut self) {
        self.control
            .set_enabled(self.style.access_when_disabled || self.appears_enabled);
    }

    fn apply_background(&mut self) {
        let color = if self.appears_enabled {
            self.style.enabled_color
        } else {
            self.style.disabled_color
        };
        self.layer.set_background(color);
    }

    /// Snap the layer tree to the settled state
    fn layout(&mut self) {
        let normal = self.normal_frame;
        let (frame, radius) = match self.state {
            LoadingState::Normal => (normal, self.style.corner_radius),
            LoadingState::Loading => (
                normal.with_width_centered(normal.height()),
                normal.height() * 0.5,
            ),
        };
        self.layer.set_frame(frame);
        self.layer.set_corner_radius(radius);
        self.control.set_frame(frame);

        if let Some(title) = self.layer.find_mut(&self.title_id) {
            title.set_frame(normal);
        }
        if let Some(spinner) = &self.spinner {
            spinner.layout(&mut self.layer);
        }
    }

    fn spinner(&mut self) -> &Spinner {
        let layer = &mut self.layer;
        let color = self.style.loader_color;
        self.spinner
            .get_or_insert_with(|| Spinner::attach(layer, SpinnerStyle::default().with_color(color)))
    }

    /// Set the model value and animate the presentation from where it is now
    fn animate(
        &mut self,
        layer_id: LayerId,
        property: AnimatedProperty,
        to: f32,
        transition: Transition,
        key: &'static str,
    ) -> StepOutcome {
        let Some(layer) = self.layer.find_mut(&layer_id) else {
            log::warn!("morph target {:?} is missing", layer_id);
            return StepOutcome::Instant;
        };

        let from = layer.presentation().get(property);
        layer.set_value(property, to);
        if transition.duration <= 0.0 || from == to {
            layer.remove_animation(key);
            return StepOutcome::Instant;
        }

        layer.add_animation(
            key,
            PropertyAnimation::basic(property, from, to, transition),
        );
        StepOutcome::Animating {
            layer: layer_id,
            key,
        }
    }
}

impl MorphTarget for LoaderButton {
    fn apply_step(&mut self, step: MorphStep) -> StepOutcome {
        let root = self.layer.id().clone();
        let key = step.animation_key();
        let height = self.normal_frame.height();

        match step {
            MorphStep::HideTitle => {
                let title = self.title_id.clone();
                let transition = self.style.title_fade;
                self.animate(title, AnimatedProperty::Opacity, 0.0, transition, key)
            }
            MorphStep::ShowTitle => {
                let title = self.title_id.clone();
                let transition = self.style.title_fade;
                self.animate(title, AnimatedProperty::Opacity, 1.0, transition, key)
            }
            MorphStep::RoundCorners => {
                let transition = self.style.corner_morph;
                self.animate(root, AnimatedProperty::CornerRadius, height * 0.5, transition, key)
            }
            MorphStep::RestoreCorners => {
                let (radius, transition) = (self.style.corner_radius, self.style.corner_morph);
                self.animate(root, AnimatedProperty::CornerRadius, radius, transition, key)
            }
            MorphStep::CollapseWidth => {
                let transition = self.style.width_morph;
                self.animate(root, AnimatedProperty::Width, height, transition, key)
            }
            MorphStep::ExpandWidth => {
                let (width, transition) = (self.normal_frame.width(), self.style.width_morph);
                self.animate(root, AnimatedProperty::Width, width, transition, key)
            }
            MorphStep::StartSpinner => {
                let spinner = self.spinner().clone();
                spinner.layout(&mut self.layer);
                spinner.start(&mut self.layer);
                StepOutcome::Instant
            }
            MorphStep::StopSpinner => {
                if let Some(spinner) = &self.spinner {
                    spinner.stop(&mut self.layer);
                }
                StepOutcome::Instant
            }
        }
    }
}

impl Interactive for LoaderButton {
    fn control_id(&self) -> &ControlId {
        self.control.id()
    }

    /// Settled frame; only updated by layout, since taps are off mid-morph
    fn hit_frame(&self) -> Rect {
        self.control.hit_frame()
    }

    fn accepts_input(&self) -> bool {
        self.control.accepts_input()
    }
}

impl std::fmt::Debug for LoaderButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderButton")
            .field("control", &self.control)
            .field("title", &self.title())
            .field("appears_enabled", &self.appears_enabled)
            .field("state", &self.state)
            .field("target", &self.target)
            .field("morph", &self.morph)
            .finish()
    }
}

/// Check if the button with the given ID was tapped this frame
pub fn button_tapped(button_id: &str, events: &[TargetedEvent]) -> bool {
    was_tapped(button_id, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blink::BLINK_KEY;
    use morph_gui::{ControlEvent, Point};
    use std::cell::Cell;
    use std::rc::Rc;

    const FRAME: Duration = Duration::from_millis(16);

    fn button() -> LoaderButton {
        LoaderButton::new("go", Rect::from_min_size([0.0, 0.0], [320.0, 45.0])).with_title("GO")
    }

    fn settle(button: &mut LoaderButton) {
        for _ in 0..500 {
            if !button.is_morphing() {
                break;
            }
            button.update(FRAME);
        }
        assert!(!button.is_morphing(), "morph did not settle");
    }

    fn title_opacity(button: &LoaderButton) -> f32 {
        button
            .layer()
            .find(&LayerId::new("go_title"))
            .map(Layer::opacity)
            .unwrap_or(-1.0)
    }

    fn tap() -> TargetedEvent {
        TargetedEvent {
            event: ControlEvent::TouchUpInside {
                position: Point::new(5.0, 5.0),
            },
            target: ControlId::new("go"),
        }
    }

    #[test]
    fn test_enabled_swaps_background() {
        let mut button = button();
        button.set_enabled(false);
        assert_eq!(button.layer().background(), button.disabled_color());
        assert!(!button.is_enabled());
        assert!(!button.appears_enabled());

        button.set_enabled(true);
        assert_eq!(button.layer().background(), button.enabled_color());
        assert!(button.is_enabled());
    }

    #[test]
    fn test_enable_blinks_disable_does_not() {
        let mut button = button();
        button.set_enabled(false);
        assert!(button.layer().animation(BLINK_KEY).is_none());
        button.set_enabled(true);
        assert!(button.layer().animation(BLINK_KEY).is_some());
    }

    #[test]
    fn test_color_setters_respect_enabled_state() {
        let mut button = button();
        button.set_enabled(false);
        button.set_enabled_color(css::GREEN);
        assert_eq!(button.layer().background(), button.disabled_color());
        button.set_disabled_color(css::SILVER);
        assert_eq!(button.layer().background(), css::SILVER);
    }

    #[test]
    fn test_access_when_disabled_keeps_taps() {
        let count = Rc::new(Cell::new(0));
        let mut button = button();
        let c = count.clone();
        button.on_tap(move |_| c.set(c.get() + 1));

        button.set_enabled(false);
        assert!(!button.handle_event(&tap()));

        button.set_access_when_disabled(true);
        assert!(button.is_enabled());
        assert!(!button.appears_enabled());
        assert_eq!(button.layer().background(), button.disabled_color());
        assert!(button.handle_event(&tap()));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_loading_scenario_round_trip() {
        let mut button = button();
        assert_eq!(button.layer().corner_radius(), 10.0);

        button.start_loading();
        assert!(button.is_loading());
        assert!(button.is_morphing());
        settle(&mut button);

        assert_eq!(button.loading_state(), LoadingState::Loading);
        let presented = button.layer().presentation();
        assert!((presented.corner_radius - 22.5).abs() < 1e-3);
        assert!((presented.frame.width() - 45.0).abs() < 1e-3);
        assert_eq!(presented.frame.center(), button.normal_frame().center());
        assert_eq!(title_opacity(&button), 0.0);
        assert!(button.is_spinning());

        button.stop_loading();
        assert!(!button.is_loading());
        settle(&mut button);

        assert_eq!(button.loading_state(), LoadingState::Normal);
        let presented = button.layer().presentation();
        assert_eq!(presented.corner_radius, 10.0);
        assert_eq!(presented.frame, button.normal_frame());
        assert_eq!(title_opacity(&button), 1.0);
        assert!(!button.is_spinning());
    }

    #[test]
    fn test_morph_runs_steps_in_order() {
        let mut button = button();
        button.start_loading();

        // Title fade first, shape untouched
        assert!(button.layer().animation("corner_morph").is_none());
        assert_eq!(button.layer().frame().width(), 320.0);

        for _ in 0..10 {
            button.update(FRAME);
        }
        assert!(button.layer().animation("corner_morph").is_some());
        assert!(button.layer().animation("width_morph").is_none());
        assert!(!button.is_spinning());
    }

    #[test]
    fn test_start_loading_twice_is_noop() {
        let mut button = button();
        button.start_loading();
        button.update(FRAME);
        button.start_loading();
        settle(&mut button);

        button.start_loading();
        assert!(!button.is_morphing());
        assert_eq!(button.loading_state(), LoadingState::Loading);
        assert!((button.frame().width() - 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_stop_loading_when_normal_is_noop() {
        let mut button = button();
        button.stop_loading();
        assert!(!button.is_morphing());
        assert_eq!(button.frame(), button.normal_frame());
        assert!(button.accepts_input());
    }

    #[test]
    fn test_interaction_blocked_while_morphing_and_loading() {
        let mut button = button();
        button.start_loading();
        assert!(!button.accepts_input());
        assert!(!button.handle_event(&tap()));
        settle(&mut button);
        assert!(!button.accepts_input());

        button.stop_loading();
        assert!(!button.accepts_input());
        settle(&mut button);
        assert!(button.accepts_input());
        assert!(button.handle_event(&tap()));
    }

    #[test]
    fn test_request_during_morph_applies_after_settle() {
        let mut button = button();
        button.start_loading();
        button.update(FRAME);
        button.stop_loading();
        assert!(!button.is_loading());

        settle(&mut button);
        assert_eq!(button.loading_state(), LoadingState::Normal);
        assert_eq!(button.frame(), button.normal_frame());
        assert_eq!(button.layer().corner_radius(), 10.0);
        assert!(!button.is_spinning());
        assert!(button.accepts_input());
    }

    #[test]
    fn test_flip_back_to_running_target_does_not_reverse() {
        let mut button = button();
        button.start_loading();
        button.update(FRAME);
        button.stop_loading();
        button.start_loading();
        assert!(button.is_loading());

        settle(&mut button);
        assert_eq!(button.loading_state(), LoadingState::Loading);
        assert!((button.frame().width() - 45.0).abs() < 1e-3);
        assert_eq!(button.layer().corner_radius(), 22.5);
        assert!(button.is_spinning());
        assert!(!button.accepts_input());
    }

    #[test]
    fn test_set_frame_during_morph_applies_on_settle() {
        let mut button = button();
        let moved = Rect::from_min_size([0.0, 100.0], [200.0, 60.0]);

        button.start_loading();
        button.update(FRAME);
        button.set_frame(moved);
        assert_eq!(button.normal_frame(), moved);
        assert_eq!(button.frame().height(), 45.0);

        settle(&mut button);
        assert_eq!(button.frame(), Rect::from_center_size(moved.center(), [60.0, 60.0]));
        assert_eq!(button.layer().corner_radius(), 30.0);
        assert_eq!(button.hit_frame(), button.frame());

        button.stop_loading();
        settle(&mut button);
        assert_eq!(button.frame(), moved);
        assert_eq!(button.layer().corner_radius(), 10.0);
        assert_eq!(button.hit_frame(), moved);
    }

    #[test]
    fn test_instant_transitions_settle_synchronously() {
        let mut button = button().with_style(LoaderButtonStyle::default().without_animations());
        button.start_loading();
        assert!(!button.is_morphing());
        assert_eq!(button.loading_state(), LoadingState::Loading);
        assert_eq!(button.layer().corner_radius(), 22.5);
        assert!(button.is_spinning());

        button.stop_loading();
        assert_eq!(button.loading_state(), LoadingState::Normal);
        assert_eq!(button.frame().width(), 320.0);
    }

    #[test]
    fn test_corner_radius_change_waits_for_normal() {
        let mut button = button().with_style(LoaderButtonStyle::default().without_animations());
        button.start_loading();
        button.set_corner_radius(4.0);
        assert_eq!(button.layer().corner_radius(), 22.5);
        button.stop_loading();
        assert_eq!(button.layer().corner_radius(), 4.0);
    }

    #[test]
    fn test_loader_color_reaches_spinner() {
        let mut button = button().with_style(LoaderButtonStyle::default().without_animations());
        button.start_loading();
        button.set_loader_color(css::WHITE);
        let spinner = button
            .layer()
            .find(&LayerId::new("go_spinner"))
            .expect("spinner attached");
        let LayerContent::Arc { stroke, .. } = spinner.content() else {
            panic!("spinner should draw an arc");
        };
        assert_eq!(stroke.color, css::WHITE);
    }

    #[test]
    fn test_background_image_matches_frame() {
        let button = button();
        let image = button.background_image().expect("drawable swatch");
        assert_eq!((image.width(), image.height()), (320, 45));
        assert_eq!(
            image.pixel(0, 0),
            Some(button.enabled_color().to_rgba8())
        );
    }

    #[test]
    fn test_button_tapped_helper() {
        assert!(button_tapped("go", &[tap()]));
        assert!(!button_tapped("other", &[tap()]));
    }
}
