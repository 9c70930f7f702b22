mod event;
mod sink;

pub use event::{
    Event, PayloadProjection, PayloadResetView, PayloadRotate, PayloadTranslate, PayloadZoom,
};

pub use sink::EventSink;
