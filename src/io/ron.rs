//! RON I/O
use crate::{
    error::Result,
    traits::{ConvertToSerializable, Mesh, RONExport, RONImport},
};

impl<M: Mesh + ConvertToSerializable> RONExport for M {
    fn to_ron_string(&self) -> Result<String> {
        Ok(ron::to_string(&self.to_serializable())?)
    }
}

impl<M: Mesh + ConvertToSerializable> RONImport for M
where
    M::SerializableType: serde::de::DeserializeOwned,
{
    fn from_ron_string(s: &str) -> Result<Self> {
        Self::from_serializable(ron::from_str(s)?)
    }
}
