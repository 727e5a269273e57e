use super::{zoom_controls::ZoomControls, zoom_readout::ZoomReadout};
use pinch_zoom::{PinchZoom, ZoomCallbacks};
use web_sys::HtmlElement;
use yew::prelude::*;

const BUTTON_ZOOM_STEP: f64 = 1.25;
// Read by PinchZoom::attach_from_dataset.
const SURFACE_CONFIG: &str = r#"{"minScale": 0.5, "maxScale": 8, "initialScale": 1}"#;

#[function_component(App)]
pub fn app() -> Html {
    let surface_ref = use_node_ref();
    let pinch_zoom = use_mut_ref(|| None::<PinchZoom>);
    let scale = use_state(|| 1.0_f64);
    let offset = use_state(|| (0.0_f64, 0.0_f64));

    // Attach once the element exists; detach on unmount.
    {
        let surface_ref = surface_ref.clone();
        let pinch_zoom = pinch_zoom.clone();
        let scale = scale.clone();
        let offset = offset.clone();
        use_effect_with((), move |_| {
            if let Some(element) = surface_ref.cast::<HtmlElement>() {
                let callbacks = ZoomCallbacks {
                    on_zoom: Some(Callback::from(move |s: f64| scale.set(s))),
                    on_pan: Some(Callback::from(move |p: (f64, f64)| offset.set(p))),
                };
                match PinchZoom::attach_from_dataset(element, callbacks) {
                    Ok(pz) => *pinch_zoom.borrow_mut() = Some(pz),
                    Err(err) => log::error!("pinch zoom unavailable: {err}"),
                }
            }
            move || {
                if let Some(pz) = pinch_zoom.borrow_mut().take() {
                    pz.destroy();
                }
            }
        });
    }

    let zoom_by = |factor: f64| {
        let pinch_zoom = pinch_zoom.clone();
        Callback::from(move |_: ()| {
            if let Some(pz) = pinch_zoom.borrow().as_ref() {
                pz.set_scale(pz.scale() * factor);
            }
        })
    };
    let zoom_in = zoom_by(BUTTON_ZOOM_STEP);
    let zoom_out = zoom_by(1.0 / BUTTON_ZOOM_STEP);
    let reset = {
        let pinch_zoom = pinch_zoom.clone();
        Callback::from(move |_: ()| {
            if let Some(pz) = pinch_zoom.borrow().as_ref() {
                pz.reset();
            }
        })
    };

    let (offset_x, offset_y) = *offset;
    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0d1117; color:#c9d1d9;">
            <div ref={surface_ref} data-pinch-zoom={SURFACE_CONFIG} style="width:800px; height:600px; background-image:linear-gradient(#30363d 1px, transparent 1px), linear-gradient(90deg, #30363d 1px, transparent 1px); background-size:40px 40px;">
                <p style="margin:0; padding:24px; font-size:18px;">{"Pinch, drag or scroll to move around."}</p>
            </div>
            <ZoomReadout scale={*scale} offset_x={offset_x} offset_y={offset_y} />
            <ZoomControls on_zoom_in={zoom_in} on_zoom_out={zoom_out} on_reset={reset} />
        </div>
    }
}
