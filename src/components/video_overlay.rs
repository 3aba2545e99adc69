use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VideoOverlayProps {
    pub overlay_ref: NodeRef,
    pub video_ref: NodeRef,
}

#[function_component]
pub fn VideoOverlay(props: &VideoOverlayProps) -> Html {
    html! {
        <div ref={props.overlay_ref.clone()} id="video-overlay" style="position:fixed; inset:0; display:none; align-items:center; justify-content:center; background:#000; z-index:40;">
            <video ref={props.video_ref.clone()} id="game-video" playsinline={true} style="max-width:100%; max-height:100%;"></video>
        </div>
    }
}
