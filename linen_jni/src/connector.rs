//! A registry of live connections to named nodes. Connections are made
//! by a [`NodeConnector`], once per run, and looked up by name afterwards.

use crate::errors::{BridgeError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Settings handed to a connector when it opens a connection.
pub type NodeConfig = HashMap<String, serde_json::Value>;

/// A live connection to a node.
pub trait NodeConnection: Send + Sync {
    /// The node name this connection was opened for.
    fn name(&self) -> &str;
}

/// Knows how to open connections to nodes.
pub trait NodeConnector {
    /// Open a new connection to `name` for the run identified by `run_id`.
    fn create_connection(
        &self,
        name: &str,
        config: &NodeConfig,
        run_id: Uuid,
    ) -> anyhow::Result<Arc<dyn NodeConnection>>;
}

/// Maps node names to their open connections.
pub struct NodeManager<C: NodeConnector> {
    connector: C,
    nodes: HashMap<String, Arc<dyn NodeConnection>>,
}

impl<C: NodeConnector> NodeManager<C> {
    /// Creates a manager with no connections.
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            nodes: HashMap::new(),
        }
    }

    /// Returns the connection registered under `name`.
    pub fn get_connection(&self, name: &str) -> Result<Arc<dyn NodeConnection>> {
        self.nodes
            .get(name)
            .cloned()
            .ok_or_else(|| BridgeError::NodeNotFound { name: name.to_string() })
    }

    /// Opens a connection through the connector and registers it under
    /// `name`, replacing any previous one. On failure the registry is
    /// left as it was.
    pub fn connect(&mut self, name: &str, config: &NodeConfig, run_id: Uuid) -> Result<Arc<dyn NodeConnection>> {
        let connection = self
            .connector
            .create_connection(name, config, run_id)
            .map_err(BridgeError::Connector)?;
        debug!("Connected to node {name} for run {run_id}");
        self.nodes.insert(name.to_string(), connection.clone());
        Ok(connection)
    }

    /// Drops the connection registered under `name`.
    pub fn disconnect(&mut self, name: &str) -> Result<()> {
        if self.nodes.remove(name).is_none() {
            return Err(BridgeError::NodeNotFound { name: name.to_string() });
        }
        debug!("Disconnected from node {name}");
        Ok(())
    }

    /// Is there a connection for `name`?
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Number of registered connections.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no connections are registered.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
