use surfacekit::bank::{Item, ValueKind};
use surfacekit::model::BankKind;
use surfacekit_display::grid::{label, ChannelHeader, ParameterElement};
use surfacekit_display::{GridElement, GridModel};

use crate::event::ButtonEvent;
use crate::mode::{
    apply_knob, bank_lights, fader_value, touch_value, ButtonColor, ButtonRow, Mode,
    SurfaceContext, TouchState,
};

use super::DEVICE;

/// Knobs control the visible parameters of the selected device.
#[derive(Debug, Clone)]
pub struct DeviceParamsMode {
    absolute: bool,
    touch: TouchState,
}

impl Default for DeviceParamsMode {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceParamsMode {
    pub fn new() -> Self {
        Self {
            absolute: false,
            touch: TouchState::default(),
        }
    }

    pub fn with_absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }
}

impl Mode for DeviceParamsMode {
    fn name(&self) -> &str {
        DEVICE
    }

    fn is_temporary(&self) -> bool {
        false
    }

    fn is_absolute(&self) -> bool {
        self.absolute
    }

    fn on_activate(&mut self, _ctx: &mut SurfaceContext<'_>) {
        self.touch.reset();
    }

    fn on_deactivate(&mut self, ctx: &mut SurfaceContext<'_>) {
        self.touch.release_all(ctx, BankKind::DeviceParameters, ValueKind::Parameter);
    }

    fn on_knob_value(&mut self, ctx: &mut SurfaceContext<'_>, index: usize, value: i32) {
        apply_knob(
            ctx,
            BankKind::DeviceParameters,
            index,
            ValueKind::Parameter,
            value,
            self.absolute,
        );
    }

    fn knob_value(&self, ctx: &SurfaceContext<'_>, index: usize) -> Option<i32> {
        ctx.model
            .device_parameters
            .item(index)?
            .value(ValueKind::Parameter)
            .map(|v| v.value())
    }

    fn on_knob_touch(&mut self, ctx: &mut SurfaceContext<'_>, index: usize, touched: bool) {
        self.touch.set(index, touched);
        touch_value(ctx, BankKind::DeviceParameters, index, ValueKind::Parameter, touched);
    }

    fn on_button(
        &mut self,
        ctx: &mut SurfaceContext<'_>,
        row: ButtonRow,
        index: usize,
        event: ButtonEvent,
    ) {
        if row == ButtonRow::First && event == ButtonEvent::Pressed {
            self.select_item(ctx, index);
        }
    }

    fn update_display(&self, ctx: &SurfaceContext<'_>, grid: &mut GridModel) {
        let params = &ctx.model.device_parameters;
        for column in 0..grid.columns() {
            let mut header = ChannelHeader::default();
            if column == 0 {
                header.menu_name = label(DEVICE);
                header.is_menu_selected = true;
                header.name = label(&ctx.model.device_name);
            }
            let element = match params.item(column).filter(|p| p.exists()) {
                Some(param) => ParameterElement {
                    header: ChannelHeader {
                        is_selected: params.is_slot_selected(column),
                        ..header
                    },
                    parameter_name: label(param.name()),
                    fader: fader_value(
                        param.value(ValueKind::Parameter),
                        self.touch.is_touched(column),
                    ),
                },
                None => ParameterElement {
                    header,
                    ..ParameterElement::default()
                },
            };
            grid.set_element(column, GridElement::Parameter(element));
        }
    }

    fn update_first_row(&self, ctx: &SurfaceContext<'_>, lights: &mut [ButtonColor]) {
        bank_lights(&ctx.model.device_parameters, lights);
    }

    fn bank_kind(&self) -> Option<BankKind> {
        Some(BankKind::DeviceParameters)
    }
}
