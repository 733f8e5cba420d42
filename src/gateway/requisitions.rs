use async_trait::async_trait;

use super::{HttpGateway, RequisitionApi};
use crate::errors::GatewayError;
use crate::types::requisition::{CreateRequisitionData, Requisition, RequisitionQuery};
use crate::types::wire::{RequisitionListPayload, RequisitionPayload};

const RESOURCE: &str = "requisition";

#[async_trait]
impl RequisitionApi for HttpGateway {
    async fn list(&self, query: &RequisitionQuery) -> Result<Vec<Requisition>, GatewayError> {
        tracing::debug!(?query, "GET /api/requisitions");
        let builder = self
            .client()
            .get(self.url("/api/requisitions"))
            .query(query);
        let envelope = self
            .send::<RequisitionListPayload>(builder, true, RESOURCE)
            .await?;
        // An empty list legitimately arrives as missing data on some
        // backends; treat it as zero requisitions rather than a decode error
        Ok(envelope.data.map(|p| p.requisitions).unwrap_or_default())
    }

    async fn fetch(&self, id: &str) -> Result<Requisition, GatewayError> {
        tracing::debug!(id, "GET /api/requisitions/{{id}}");
        let builder = self
            .client()
            .get(self.url(&format!("/api/requisitions/{}", id)));
        let envelope = self
            .send::<RequisitionPayload>(builder, true, RESOURCE)
            .await?;
        Ok(Self::expect_data(envelope, RESOURCE)?.requisition)
    }

    async fn create(&self, data: &CreateRequisitionData) -> Result<Requisition, GatewayError> {
        tracing::debug!(name = %data.name, "POST /api/requisitions");
        let builder = self
            .client()
            .post(self.url("/api/requisitions"))
            .json(data);
        let envelope = self
            .send::<RequisitionPayload>(builder, true, RESOURCE)
            .await?;
        Ok(Self::expect_data(envelope, RESOURCE)?.requisition)
    }

    async fn update(
        &self,
        id: &str,
        data: &CreateRequisitionData,
    ) -> Result<Requisition, GatewayError> {
        tracing::debug!(id, "PUT /api/requisitions/{{id}}");
        let builder = self
            .client()
            .put(self.url(&format!("/api/requisitions/{}", id)))
            .json(data);
        let envelope = self
            .send::<RequisitionPayload>(builder, true, RESOURCE)
            .await?;
        Ok(Self::expect_data(envelope, RESOURCE)?.requisition)
    }

    async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        tracing::debug!(id, "DELETE /api/requisitions/{{id}}");
        let builder = self
            .client()
            .delete(self.url(&format!("/api/requisitions/{}", id)));
        self.send::<serde_json::Value>(builder, true, RESOURCE)
            .await?;
        Ok(())
    }
}
