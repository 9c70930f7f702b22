use super::Event;

/// Receiver of widget events.
///
/// Implemented for crossbeam channel senders and for plain closures, so
/// both a channel-draining app and an inline handler work:
///
/// ```ignore
/// let (tx, rx) = crossbeam::channel::unbounded();
/// MeshView::new(&mesh, &mut prefs).with_event_sink(&tx);
/// ```
pub trait EventSink {
    fn send(&self, event: Event);
}

impl EventSink for crossbeam::channel::Sender<Event> {
    fn send(&self, event: Event) {
        if let Err(e) = self.try_send(event) {
            log::debug!("event dropped: {e}");
        }
    }
}

impl<F> EventSink for F
where
    F: Fn(Event),
{
    fn send(&self, event: Event) {
        self(event);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_channel_sink() {
        let (tx, rx) = crossbeam::channel::unbounded();
        let sink: &dyn EventSink = &tx;
        sink.send(Event::Zoom(crate::events::PayloadZoom {
            diff: 0.,
            new_zoom: -10.,
        }));
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn test_closure_sink() {
        let seen = RefCell::new(Vec::new());
        let closure = |e: Event| seen.borrow_mut().push(e);
        let sink: &dyn EventSink = &closure;
        sink.send(Event::Projection(crate::events::PayloadProjection {
            perspective: true,
        }));
        assert_eq!(seen.borrow().len(), 1);
    }
}
