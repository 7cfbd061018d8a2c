use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU32, Ordering},
    },
};

use crate::{KeyAttributes, KeyId, StoreError};

/// Contract offered by an opaque key store.
///
/// Implementations own the private key material; callers interact only
/// through [`KeyId`] handles.
pub trait KeyStore {
    /// Imports key material, returning the store-managed identifier.
    fn import_key(&self, attrs: &KeyAttributes, data: &[u8]) -> Result<KeyId, StoreError>;

    /// Reads the metadata recorded for a key.
    fn key_attributes(&self, id: KeyId) -> Result<KeyAttributes, StoreError>;

    /// Exports the public part of a key into `out`, returning the number of
    /// bytes written.
    fn export_public_key(&self, id: KeyId, out: &mut [u8]) -> Result<usize, StoreError>;

    /// Destroys a key and invalidates its identifier.
    fn destroy_key(&self, id: KeyId) -> Result<(), StoreError>;
}

/// Process-local key store for development and tests.
///
/// Keys are lost when the process exits. Only the public half of the material
/// is retained, which is all [`KeyStore::export_public_key`] needs.
#[derive(Clone, Default)]
pub struct InMemoryKeyStore {
    keys: Arc<Mutex<HashMap<KeyId, StoredKey>>>,
    next_id: Arc<AtomicU32>,
}

#[derive(Clone)]
struct StoredKey {
    attrs: KeyAttributes,
    public: Vec<u8>,
}

impl KeyStore for InMemoryKeyStore {
    fn import_key(&self, attrs: &KeyAttributes, data: &[u8]) -> Result<KeyId, StoreError> {
        if data.is_empty() {
            return Err(StoreError::InvalidArgument);
        }
        let id = KeyId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let mut keys = self.keys.lock().map_err(|_| StoreError::BadState)?;
        keys.insert(
            id,
            StoredKey {
                attrs: *attrs,
                public: data.to_vec(),
            },
        );
        Ok(id)
    }

    fn key_attributes(&self, id: KeyId) -> Result<KeyAttributes, StoreError> {
        let keys = self.keys.lock().map_err(|_| StoreError::BadState)?;
        keys.get(&id)
            .map(|key| key.attrs)
            .ok_or(StoreError::DoesNotExist)
    }

    fn export_public_key(&self, id: KeyId, out: &mut [u8]) -> Result<usize, StoreError> {
        let keys = self.keys.lock().map_err(|_| StoreError::BadState)?;
        let key = keys.get(&id).ok_or(StoreError::DoesNotExist)?;
        out.get_mut(..key.public.len())
            .ok_or(StoreError::BufferTooSmall)?
            .copy_from_slice(&key.public);
        Ok(key.public.len())
    }

    fn destroy_key(&self, id: KeyId) -> Result<(), StoreError> {
        let mut keys = self.keys.lock().map_err(|_| StoreError::BadState)?;
        keys.remove(&id).map(|_| ()).ok_or(StoreError::DoesNotExist)
    }
}
