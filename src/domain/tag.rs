// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tags and the heterogeneous resources they label

use serde::Serialize;

use super::{Drive, Ip, Meta, Owner, ResourceRef, Server, TagResourceType, Vlan};

/// Tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<TagResource>,
    #[serde(skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
}

impl Tag {
    pub fn builder() -> TagBuilder {
        TagBuilder::default()
    }

    /// Reference carrying only an identity
    pub fn with_uuid(uuid: impl Into<String>) -> Self {
        Self {
            uuid: Some(uuid.into()),
            ..Default::default()
        }
    }

    /// Tagged resources of one kind
    pub fn resources_of(&self, kind: TagResourceType) -> impl Iterator<Item = &TagResource> {
        self.resources
            .iter()
            .filter(move |resource| resource.resource_type() == kind)
    }
}

/// Builder for [`Tag`]
#[derive(Debug, Clone, Default)]
pub struct TagBuilder {
    tag: Tag,
}

impl TagBuilder {
    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.tag.uuid = Some(uuid.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.tag.name = Some(name.into());
        self
    }

    pub fn resource(mut self, resource: TagResource) -> Self {
        self.tag.resources.push(resource);
        self
    }

    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tag.meta.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Tag {
        self.tag
    }
}

/// Resource labelled by a tag, discriminated by `res_type`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "res_type", rename_all = "lowercase")]
pub enum TagResource {
    #[serde(rename = "servers")]
    Server(Server),
    #[serde(rename = "drives")]
    Drive(Drive),
    #[serde(rename = "ips")]
    Ip(Ip),
    #[serde(rename = "vlans")]
    Vlan(Vlan),
    /// Resource kind this client does not model
    Unrecognized(ResourceRef),
}

impl TagResource {
    pub fn resource_type(&self) -> TagResourceType {
        match self {
            Self::Server(_) => TagResourceType::Servers,
            Self::Drive(_) => TagResourceType::Drives,
            Self::Ip(_) => TagResourceType::Ips,
            Self::Vlan(_) => TagResourceType::Vlans,
            Self::Unrecognized(_) => TagResourceType::Unrecognized,
        }
    }

    pub fn uuid(&self) -> Option<&str> {
        match self {
            Self::Server(server) => server.uuid.as_deref(),
            Self::Drive(drive) => drive.uuid.as_deref(),
            Self::Ip(ip) => ip.uuid.as_deref(),
            Self::Vlan(vlan) => vlan.uuid.as_deref(),
            Self::Unrecognized(reference) => reference.uuid.as_deref(),
        }
    }

    pub fn resource_uri(&self) -> Option<&str> {
        match self {
            Self::Server(server) => server.resource_uri.as_deref(),
            Self::Drive(drive) => drive.resource_uri.as_deref(),
            Self::Ip(ip) => ip.resource_uri.as_deref(),
            Self::Vlan(vlan) => vlan.resource_uri.as_deref(),
            Self::Unrecognized(reference) => reference.resource_uri.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resources_of_kind() {
        let tag = Tag::builder()
            .name("production")
            .resource(TagResource::Server(Server::with_uuid("s1")))
            .resource(TagResource::Drive(Drive::with_uuid("d1")))
            .resource(TagResource::Server(Server::with_uuid("s2")))
            .build();

        let servers: Vec<_> = tag
            .resources_of(TagResourceType::Servers)
            .filter_map(TagResource::uuid)
            .collect();
        assert_eq!(servers, vec!["s1", "s2"]);
    }

    #[test]
    fn test_unrecognized_resource_keeps_identity() {
        let resource = TagResource::Unrecognized(ResourceRef {
            uuid: Some("a1".to_string()),
            resource_uri: Some("/api/2.0/snapshots/a1/".to_string()),
            owner: None,
        });
        assert_eq!(resource.resource_type(), TagResourceType::Unrecognized);
        assert_eq!(resource.uuid(), Some("a1"));
        assert_eq!(resource.resource_uri(), Some("/api/2.0/snapshots/a1/"));
    }
}
