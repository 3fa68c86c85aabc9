// Network state - the connection cards and their toggle

use crate::model::Connection;

pub struct NetworkState {
    pub connections: Vec<Connection>,
}

impl NetworkState {
    pub fn new(connections: Vec<Connection>) -> Self {
        Self { connections }
    }

    pub fn toggle_connection(&mut self, id: u64) {
        if let Some(connection) = self.connections.iter_mut().find(|c| c.id == id) {
            connection.connected = !connection.connected;
        }
    }

    pub fn connected_count(&self) -> usize {
        self.connections.iter().filter(|c| c.connected).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NetworkState {
        NetworkState::new(vec![
            Connection {
                id: 1,
                name: "Alice Johnson".to_string(),
                headline: "UX Designer".to_string(),
                connected: false,
            },
            Connection {
                id: 2,
                name: "Bob Smith".to_string(),
                headline: "Frontend Developer".to_string(),
                connected: true,
            },
        ])
    }

    #[test]
    fn toggle_flips_only_the_target() {
        let mut network = sample();
        network.toggle_connection(1);
        assert!(network.connections[0].connected);
        assert!(network.connections[1].connected);

        network.toggle_connection(1);
        assert!(!network.connections[0].connected);
    }

    #[test]
    fn connected_count_follows_toggles() {
        let mut network = sample();
        assert_eq!(network.connected_count(), 1);
        network.toggle_connection(1);
        assert_eq!(network.connected_count(), 2);
    }
}
