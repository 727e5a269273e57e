use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomReadoutProps {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

#[function_component]
pub fn ZoomReadout(props: &ZoomReadoutProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:90px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:200px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={label_style}>{"Zoom"}</span>
                <span style={value_style}>{ format!("{:.0}%", props.scale * 100.0) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Offset"}</span>
                <span style={value_style}>{ format!("{:.1}, {:.1}", props.offset_x, props.offset_y) }</span>
            </div>
        </div>
    }
}
