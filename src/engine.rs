/*!

The day-by-day SIR engine. Every decision in a step reads the previous day's
frozen state and writes a freshly built next state, so all of a day's
transitions are simultaneous: a node infected today cannot pass the infection
on until tomorrow, and recovery and transmission draws never see partial
updates.

*/

use crate::{
    EpiError, NodeId, Params, Status,
    graph::ContactGraph,
    state::{EpidemicState, Snapshot},
};
use log::{trace, warn};
use rand::Rng;
use rand::distr::{Bernoulli, Distribution};

pub struct SimulationEngine<'a> {
    graph: &'a ContactGraph,
    params: Params,
    infection_trial: Bernoulli,
    recovery_trial: Bernoulli,
}

impl<'a> SimulationEngine<'a> {
    /// Validates `params` and prepares the engine. No simulation state is
    /// built here; `step`/`run` take the state explicitly.
    pub fn new(graph: &'a ContactGraph, params: Params) -> Result<SimulationEngine<'a>, EpiError> {
        params.validate()?;
        let infection_trial = Bernoulli::new(params.p_infect)
            .map_err(|_| EpiError::config(format!("p_infect {} is not a probability", params.p_infect)))?;
        let recovery_trial = Bernoulli::new(params.p_recover)
            .map_err(|_| EpiError::config(format!("p_recover {} is not a probability", params.p_recover)))?;
        Ok(SimulationEngine {
            graph,
            params,
            infection_trial,
            recovery_trial,
        })
    }

    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Advances the epidemic by one day.
    ///
    /// For every node infected in `prev`: its days-infected counter goes up
    /// by one; it recovers if the updated counter reaches
    /// `days_to_recover` or an independent recovery trial succeeds; and each
    /// of its neighbors that was susceptible in `prev` is infected by an
    /// independent transmission trial. A susceptible node with several
    /// infected neighbors gets one trial per neighbor and turns infected if
    /// any succeeds.
    ///
    /// Nodes are visited in sorted id order so that a given seed always
    /// produces the same trial sequence. The outcome distribution does not
    /// depend on the visiting order, only the reproducibility does.
    #[must_use]
    pub fn step<R: Rng>(&self, prev: &EpidemicState, rng: &mut R) -> EpidemicState {
        let mut next = prev.clone();

        let mut infected: Vec<&NodeId> = prev
            .iter()
            .filter(|(_, health)| health.status.is_infected())
            .map(|(node, _)| node)
            .collect();
        infected.sort_unstable();

        for node in infected {
            let days_infected = prev.days_infected(node) + 1;
            if days_infected >= self.params.days_to_recover || self.recovery_trial.sample(rng) {
                // The counter freezes at the value it recovered with.
                next.set(node, Status::Recovered, days_infected);
            } else {
                next.set(node, Status::Infected, days_infected);
            }

            let mut contacts: Vec<&NodeId> = self
                .graph
                .neighbors(node)
                .filter(|contact| prev.status(contact) == Some(Status::Susceptible))
                .collect();
            contacts.sort_unstable();

            for contact in contacts {
                if self.infection_trial.sample(rng) {
                    next.set(contact, Status::Infected, 0);
                }
            }
        }

        next
    }

    /// Runs day by day until no node is infected, returning one status
    /// snapshot per simulated day. Day 1 is the first post-initialization
    /// state; a start with zero infections returns an empty sequence.
    ///
    /// Termination needs no cap: forced recovery bounds any node's infection
    /// to `days_to_recover` days and recovered nodes stay recovered, so the
    /// run ends within `node_count * days_to_recover` days. `max_days`, when
    /// set, additionally stops low-probability long tails.
    pub fn run<R: Rng>(&self, initial: &EpidemicState, rng: &mut R) -> Vec<Snapshot> {
        let mut snapshots = Vec::new();
        let mut state = initial.clone();

        while state.has_infected() {
            if let Some(max_days) = self.params.max_days {
                if snapshots.len() >= max_days as usize {
                    warn!(
                        "stopping at max_days = {max_days} with {} nodes still infected",
                        state.infected_count()
                    );
                    break;
                }
            }
            state = self.step(&state, rng);
            snapshots.push(state.snapshot());
            trace!(
                "day {}: {} infected",
                snapshots.len(),
                state.infected_count()
            );
        }

        snapshots
    }
}
