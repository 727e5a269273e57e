use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomControlsProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
}

fn control_button(label: &'static str, title: &'static str, action: &Callback<()>) -> Html {
    let onclick = action.reform(|_: MouseEvent| ());
    html! {
        <button {title} {onclick} style="min-width:32px; padding:4px 8px;">{ label }</button>
    }
}

#[function_component(ZoomControls)]
pub fn zoom_controls(props: &ZoomControlsProps) -> Html {
    html! {
        <div style="position:absolute; right:12px; bottom:12px; display:flex; flex-direction:column; gap:4px; padding:6px; background:rgba(13,17,23,0.85); border:1px solid #30363d; border-radius:6px;">
            { control_button("+", "Zoom in", &props.on_zoom_in) }
            { control_button("\u{2212}", "Zoom out", &props.on_zoom_out) }
            { control_button("1:1", "Reset view", &props.on_reset) }
        </div>
    }
}
