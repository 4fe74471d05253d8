use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::shared_spin_game::{GamePhase, SpinGame};
use shared::species::NonEmptySpecies;
use yew::prelude::*;

/// Render snapshot of the session game plus its controls.
#[derive(Clone, PartialEq)]
pub struct SpinGameHandle {
    pub phase: GamePhase,
    pub spin: Callback<()>,
    pub reset: Callback<()>,
}

/// Owns the roulette for the lifetime of the page. Each spin arms one timeout
/// per scheduled transition; reset and unmount drop them, which cancels them.
#[hook]
pub fn use_spin_game(species: &'static NonEmptySpecies) -> SpinGameHandle {
    let game = use_mut_ref(SpinGame::default);
    let rng = use_mut_ref(SmallRng::from_entropy);
    let pending = use_mut_ref(Vec::<Timeout>::new);
    let update = use_force_update();

    let spin = {
        let game = game.clone();
        let rng = rng.clone();
        let pending = pending.clone();
        let update = update.clone();

        Callback::from(move |_: ()| {
            let schedule = game.borrow_mut().trigger();
            let Some(schedule) = schedule else {
                return;
            };

            let mut timers = pending.borrow_mut();
            timers.clear();
            for scheduled in schedule.events().iter().copied() {
                let game = game.clone();
                let rng = rng.clone();
                let update = update.clone();
                timers.push(Timeout::new(scheduled.at_ms, move || {
                    let applied = game
                        .borrow_mut()
                        .apply(&scheduled, species, &mut *rng.borrow_mut());
                    if applied {
                        update.force_update();
                    }
                }));
            }
            drop(timers);
            update.force_update();
        })
    };

    let reset = {
        let game = game.clone();
        let pending = pending.clone();
        let update = update.clone();

        Callback::from(move |_: ()| {
            pending.borrow_mut().clear();
            game.borrow_mut().reset();
            update.force_update();
        })
    };

    // Cancel whatever is still pending when the page goes away
    {
        let pending = pending.clone();
        use_effect_with((), move |_| {
            move || {
                pending.borrow_mut().clear();
            }
        });
    }

    let phase = game.borrow().phase().clone();
    SpinGameHandle { phase, spin, reset }
}
