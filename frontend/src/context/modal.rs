use std::rc::Rc;

use yew::prelude::*;

use crate::lead::modal_state::{ModalAction, ModalState};

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Lets any component open or close the lead modal.
#[derive(Clone, PartialEq)]
pub struct ModalContext {
    state: UseReducerHandle<ModalState>,
}

impl ModalContext {
    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn dispatch(&self, action: ModalAction) {
        self.state.dispatch(action);
    }

    pub fn dispatcher(&self) -> UseReducerDispatcher<ModalState> {
        self.state.dispatcher()
    }

    pub fn open(&self) {
        self.dispatch(ModalAction::Open);
    }

    pub fn close(&self) {
        self.dispatch(ModalAction::Close);
    }

    pub fn open_callback<E: 'static>(&self) -> Callback<E> {
        let dispatcher = self.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(ModalAction::Open))
    }

    pub fn close_callback<E: 'static>(&self) -> Callback<E> {
        let dispatcher = self.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(ModalAction::Close))
    }
}

#[hook]
pub fn use_modal() -> Option<ModalContext> {
    use_context::<ModalContext>()
}

#[derive(Properties, PartialEq)]
pub struct ModalProviderProps {
    pub children: Children,
}

#[function_component(ModalProvider)]
pub fn modal_provider(props: &ModalProviderProps) -> Html {
    let state = use_reducer(ModalState::default);
    let context = ModalContext { state };

    html! {
        <ContextProvider<ModalContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ModalContext>>
    }
}
