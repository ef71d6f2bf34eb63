// Copyright (c) 2025 - Cowboy AI, Inc.
//! CloudSigma HTTP Client
//!
//! Thin transport over the CloudSigma 2.0 REST API. Every response body is
//! handed to the envelope unwrappers, so callers only ever see normalized
//! domain values.
//!
//! Requires the `client` feature.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use crate::compute::DriveLookup;
use crate::config::CloudSigmaConfig;
use crate::convert::FromWire;
use crate::domain::{
    AccountUsage, Balance, Discount, DriveInfo, FirewallPolicy, IpInfo, LibraryDrive, License,
    Pricing, ProfileInfo, Server, ServerInfo, Subscription, Tag, Transaction, VlanInfo,
};
use crate::envelope::{unwrap_list, unwrap_single};
use crate::errors::{CloudSigmaError, CloudSigmaResult, DecodeError};
use crate::requests::{
    CloneDriveRequest, DriveRequest, FirewallPolicyRequest, IpRequest, Objects, ProfileRequest,
    ServerRequest, SubscriptionRequest, TagRequest, VlanRequest,
};

/// Query suffix that disables pagination on list endpoints
const ALL: &str = "?limit=0";

/// CloudSigma API client
#[derive(Debug, Clone)]
pub struct CloudSigmaClient {
    config: CloudSigmaConfig,
    http: Client,
}

impl CloudSigmaClient {
    /// Create a client for the configured endpoint
    pub fn new(config: CloudSigmaConfig) -> CloudSigmaResult<Self> {
        config.validate()?;
        info!("Connecting to CloudSigma at {}", config.endpoint);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| CloudSigmaError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &CloudSigmaConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Transport
    // ------------------------------------------------------------------

    /// GET a path; a 404 yields `Ok(None)`
    async fn fetch(&self, path: &str) -> CloudSigmaResult<Option<Value>> {
        match self.send::<()>(Method::GET, path, None).await {
            Err(err) if err.is_not_found() => {
                debug!("GET {} not found", path);
                Ok(None)
            }
            other => other,
        }
    }

    /// Send a request and decode its body, if it has one
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> CloudSigmaResult<Option<Value>> {
        let url = self.config.url(path);
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, url.as_str())
            .basic_auth(&self.config.username, Some(&self.config.password));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CloudSigmaError::Http(format!("CloudSigma API error: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CloudSigmaError::Http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(CloudSigmaError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        if status == StatusCode::NO_CONTENT || text.trim().is_empty() {
            return Ok(None);
        }

        let value: Value = serde_json::from_str(&text).map_err(DecodeError::from)?;
        Ok(Some(value))
    }

    async fn get_one<T: FromWire>(&self, path: &str) -> CloudSigmaResult<Option<T>> {
        let body = self.fetch(path).await?;
        Ok(unwrap_single(body.as_ref())?)
    }

    async fn get_list<T: FromWire>(&self, path: &str) -> CloudSigmaResult<Vec<T>> {
        let body = self.fetch(path).await?;
        Ok(unwrap_list(body.as_ref())?)
    }

    /// POST a creation envelope and return the created resource
    async fn create<B: Serialize, T: FromWire>(
        &self,
        path: &str,
        body: B,
    ) -> CloudSigmaResult<Option<T>> {
        let body = self
            .send(Method::POST, path, Some(&Objects::one(body)))
            .await?;
        Ok(unwrap_single(body.as_ref())?)
    }

    /// PUT a bare body and return the updated resource
    async fn update<B: Serialize, T: FromWire>(
        &self,
        path: &str,
        body: B,
    ) -> CloudSigmaResult<Option<T>> {
        let body = self.send(Method::PUT, path, Some(&body)).await?;
        Ok(unwrap_single(body.as_ref())?)
    }

    async fn delete(&self, path: &str) -> CloudSigmaResult<()> {
        self.send::<()>(Method::DELETE, path, None).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Servers
    // ------------------------------------------------------------------

    pub async fn list_servers(&self) -> CloudSigmaResult<Vec<Server>> {
        self.get_list(&format!("servers/{}", ALL)).await
    }

    pub async fn list_servers_detail(&self) -> CloudSigmaResult<Vec<ServerInfo>> {
        self.get_list(&format!("servers/detail/{}", ALL)).await
    }

    pub async fn get_server(&self, uuid: &str) -> CloudSigmaResult<Option<ServerInfo>> {
        self.get_one(&format!("servers/{}/", segment(uuid))).await
    }

    pub async fn create_server(&self, server: &ServerInfo) -> CloudSigmaResult<Option<ServerInfo>> {
        self.create("servers/", ServerRequest::from(server)).await
    }

    pub async fn edit_server(
        &self,
        uuid: &str,
        server: &ServerInfo,
    ) -> CloudSigmaResult<Option<ServerInfo>> {
        self.update(&format!("servers/{}/", segment(uuid)), ServerRequest::from(server))
            .await
    }

    pub async fn delete_server(&self, uuid: &str) -> CloudSigmaResult<()> {
        self.delete(&format!("servers/{}/", segment(uuid))).await
    }

    pub async fn start_server(&self, uuid: &str) -> CloudSigmaResult<()> {
        self.server_action(uuid, "start").await
    }

    pub async fn stop_server(&self, uuid: &str) -> CloudSigmaResult<()> {
        self.server_action(uuid, "stop").await
    }

    async fn server_action(&self, uuid: &str, action: &str) -> CloudSigmaResult<()> {
        info!("Requesting {} of server {}", action, uuid);
        self.send::<()>(
            Method::POST,
            &format!("servers/{}/action/?do={}", segment(uuid), action),
            None,
        )
        .await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Drives
    // ------------------------------------------------------------------

    pub async fn list_drives_detail(&self) -> CloudSigmaResult<Vec<DriveInfo>> {
        self.get_list(&format!("drives/detail/{}", ALL)).await
    }

    pub async fn get_drive(&self, uuid: &str) -> CloudSigmaResult<Option<DriveInfo>> {
        self.get_one(&format!("drives/{}/", segment(uuid))).await
    }

    pub async fn create_drive(&self, drive: &DriveInfo) -> CloudSigmaResult<Option<DriveInfo>> {
        self.create("drives/", DriveRequest::from(drive)).await
    }

    pub async fn edit_drive(
        &self,
        uuid: &str,
        drive: &DriveInfo,
    ) -> CloudSigmaResult<Option<DriveInfo>> {
        self.update(&format!("drives/{}/", segment(uuid)), DriveRequest::from(drive))
            .await
    }

    pub async fn delete_drive(&self, uuid: &str) -> CloudSigmaResult<()> {
        self.delete(&format!("drives/{}/", segment(uuid))).await
    }

    /// Clone a drive; the copy is returned as soon as the API accepts it
    pub async fn clone_drive(
        &self,
        uuid: &str,
        request: &CloneDriveRequest,
    ) -> CloudSigmaResult<Option<DriveInfo>> {
        let body = self
            .send(
                Method::POST,
                &format!("drives/{}/action/?do=clone", segment(uuid)),
                Some(request),
            )
            .await?;
        Ok(unwrap_single(body.as_ref())?)
    }

    // ------------------------------------------------------------------
    // Library drives
    // ------------------------------------------------------------------

    pub async fn list_library_drives(&self) -> CloudSigmaResult<Vec<LibraryDrive>> {
        self.get_list(&format!("libdrives/{}", ALL)).await
    }

    pub async fn get_library_drive(&self, uuid: &str) -> CloudSigmaResult<Option<LibraryDrive>> {
        self.get_one(&format!("libdrives/{}/", segment(uuid))).await
    }

    // ------------------------------------------------------------------
    // Firewall policies
    // ------------------------------------------------------------------

    pub async fn list_firewall_policies_detail(&self) -> CloudSigmaResult<Vec<FirewallPolicy>> {
        self.get_list(&format!("fwpolicies/detail/{}", ALL)).await
    }

    pub async fn get_firewall_policy(
        &self,
        uuid: &str,
    ) -> CloudSigmaResult<Option<FirewallPolicy>> {
        self.get_one(&format!("fwpolicies/{}/", segment(uuid))).await
    }

    /// Full detail of a policy bound to a NIC.
    ///
    /// Server listings usually carry the policy as a bare uuid reference.
    /// A reference without rules is fetched; an embedded policy is returned as is.
    pub async fn resolve_firewall_policy(
        &self,
        policy: &FirewallPolicy,
    ) -> CloudSigmaResult<Option<FirewallPolicy>> {
        match policy.uuid.as_deref() {
            Some(uuid) if policy.rules.is_empty() => {
                debug!("Resolving firewall policy reference {}", uuid);
                self.get_firewall_policy(uuid).await
            }
            _ => Ok(Some(policy.clone())),
        }
    }

    pub async fn create_firewall_policy(
        &self,
        policy: &FirewallPolicy,
    ) -> CloudSigmaResult<Option<FirewallPolicy>> {
        self.create("fwpolicies/", FirewallPolicyRequest::from(policy))
            .await
    }

    pub async fn edit_firewall_policy(
        &self,
        uuid: &str,
        policy: &FirewallPolicy,
    ) -> CloudSigmaResult<Option<FirewallPolicy>> {
        self.update(
            &format!("fwpolicies/{}/", segment(uuid)),
            FirewallPolicyRequest::from(policy),
        )
        .await
    }

    pub async fn delete_firewall_policy(&self, uuid: &str) -> CloudSigmaResult<()> {
        self.delete(&format!("fwpolicies/{}/", segment(uuid))).await
    }

    // ------------------------------------------------------------------
    // VLANs and IPs
    // ------------------------------------------------------------------

    pub async fn list_vlans_detail(&self) -> CloudSigmaResult<Vec<VlanInfo>> {
        self.get_list(&format!("vlans/detail/{}", ALL)).await
    }

    pub async fn get_vlan(&self, uuid: &str) -> CloudSigmaResult<Option<VlanInfo>> {
        self.get_one(&format!("vlans/{}/", segment(uuid))).await
    }

    pub async fn edit_vlan(&self, uuid: &str, vlan: &VlanInfo) -> CloudSigmaResult<Option<VlanInfo>> {
        self.update(&format!("vlans/{}/", segment(uuid)), VlanRequest::from(vlan))
            .await
    }

    pub async fn list_ips_detail(&self) -> CloudSigmaResult<Vec<IpInfo>> {
        self.get_list(&format!("ips/detail/{}", ALL)).await
    }

    pub async fn get_ip(&self, uuid: &str) -> CloudSigmaResult<Option<IpInfo>> {
        self.get_one(&format!("ips/{}/", segment(uuid))).await
    }

    pub async fn edit_ip(&self, uuid: &str, ip: &IpInfo) -> CloudSigmaResult<Option<IpInfo>> {
        self.update(&format!("ips/{}/", segment(uuid)), IpRequest::from(ip))
            .await
    }

    // ------------------------------------------------------------------
    // Tags
    // ------------------------------------------------------------------

    pub async fn list_tags_detail(&self) -> CloudSigmaResult<Vec<Tag>> {
        self.get_list(&format!("tags/detail/{}", ALL)).await
    }

    pub async fn get_tag(&self, uuid: &str) -> CloudSigmaResult<Option<Tag>> {
        self.get_one(&format!("tags/{}/", segment(uuid))).await
    }

    pub async fn create_tag(&self, tag: &Tag) -> CloudSigmaResult<Option<Tag>> {
        self.create("tags/", TagRequest::from(tag)).await
    }

    pub async fn edit_tag(&self, uuid: &str, tag: &Tag) -> CloudSigmaResult<Option<Tag>> {
        self.update(&format!("tags/{}/", segment(uuid)), TagRequest::from(tag))
            .await
    }

    pub async fn delete_tag(&self, uuid: &str) -> CloudSigmaResult<()> {
        self.delete(&format!("tags/{}/", segment(uuid))).await
    }

    /// Servers carrying a tag, with detail
    pub async fn list_tagged_servers(&self, uuid: &str) -> CloudSigmaResult<Vec<ServerInfo>> {
        self.get_list(&format!("tags/{}/servers/detail/{}", segment(uuid), ALL))
            .await
    }

    // ------------------------------------------------------------------
    // Billing and account
    // ------------------------------------------------------------------

    pub async fn list_subscriptions(&self) -> CloudSigmaResult<Vec<Subscription>> {
        self.get_list(&format!("subscriptions/{}", ALL)).await
    }

    pub async fn get_subscription(&self, id: &str) -> CloudSigmaResult<Option<Subscription>> {
        self.get_one(&format!("subscriptions/{}/", segment(id))).await
    }

    pub async fn create_subscription(
        &self,
        subscription: &Subscription,
    ) -> CloudSigmaResult<Option<Subscription>> {
        self.create("subscriptions/", SubscriptionRequest::from(subscription))
            .await
    }

    pub async fn list_pricing(&self) -> CloudSigmaResult<Vec<Pricing>> {
        self.get_list(&format!("pricing/{}", ALL)).await
    }

    pub async fn balance(&self) -> CloudSigmaResult<Option<Balance>> {
        self.get_one("balance/").await
    }

    pub async fn current_usage(&self) -> CloudSigmaResult<Option<AccountUsage>> {
        self.get_one("currentusage/").await
    }

    pub async fn list_discounts(&self) -> CloudSigmaResult<Vec<Discount>> {
        self.get_list("discount/").await
    }

    pub async fn list_transactions(&self) -> CloudSigmaResult<Vec<Transaction>> {
        self.get_list(&format!("ledger/{}", ALL)).await
    }

    pub async fn list_licenses(&self) -> CloudSigmaResult<Vec<License>> {
        self.get_list(&format!("licenses/{}", ALL)).await
    }

    pub async fn profile(&self) -> CloudSigmaResult<Option<ProfileInfo>> {
        self.get_one("profile/").await
    }

    pub async fn edit_profile(&self, profile: &ProfileInfo) -> CloudSigmaResult<Option<ProfileInfo>> {
        self.update("profile/", ProfileRequest::from(profile)).await
    }
}

#[async_trait]
impl DriveLookup for CloudSigmaClient {
    async fn drive_info(&self, uuid: &str) -> CloudSigmaResult<Option<DriveInfo>> {
        self.get_drive(uuid).await
    }
}

/// Escape a caller-supplied path segment
fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
