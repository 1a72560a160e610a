use sea_query::Iden;

#[derive(Iden, Clone, Copy)]
pub enum AppUser {
    Table,
    Id,
    Login,
    FirstName,
    LastName,
    Email,
    Phone,
    Role,
    IsActive,
    ProfilePicture,
    Preferences,
    LastLoginAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum Client {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Address,
    Company,
    TaxId,
    Notes,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum BudgetTemplate {
    Table,
    Id,
    Name,
    Description,
    Type,
    Category,
    IsActive,
    IsSystem,
    Configuration,
    TemplateData,
    Version,
    CreatedAt,
    UpdatedAt,
    CreatedById,
}

#[derive(Iden, Clone, Copy)]
pub enum WeeklyPlan {
    Table,
    Id,
    WeekStart,
    WeekEnd,
    PlanName,
    Status,
    TotalBudgets,
    TotalGuests,
    EstimatedCost,
    ActualCost,
    Notes,
    IsConsolidated,
    ConsolidatedAt,
    CreatedAt,
    UpdatedAt,
    CreatedById,
}

#[derive(Iden, Clone, Copy)]
pub enum Budget {
    Table,
    Id,
    Name,
    ClientName,
    EventDate,
    EventLocation,
    GuestCount,
    EventGender,
    Description,
    TotalAmount,
    TotalCost,
    ProfitMargin,
    MealsAmount,
    ActivitiesAmount,
    TransportAmount,
    AccommodationAmount,
    Status,
    PaymentStatus,
    IsClosed,
    InternalNotes,
    ClientNotes,
    TemplateId,
    WorkflowTriggered,
    LastWorkflowExecution,
    Version,
    ConflictStatus,
    LastModifiedBy,
    ApprovedAt,
    ReservedAt,
    CreatedAt,
    UpdatedAt,
    CreatedById,
    AssignedToId,
    ClientId,
    BudgetTemplateId,
    WeeklyPlanId,
}

#[derive(Iden, Clone, Copy)]
pub enum BudgetItem {
    Table,
    Id,
    ItemType,
    TemplateId,
    TemplateName,
    Quantity,
    UnitPrice,
    UnitCost,
    TotalPrice,
    TotalCost,
    Customizations,
    Notes,
    IsCustomized,
    Version,
    CreatedAt,
    UpdatedAt,
    BudgetId,
}

#[derive(Iden, Clone, Copy)]
pub enum Payment {
    Table,
    Id,
    Method,
    Amount,
    PaymentDate,
    Reference,
    Notes,
    IsConfirmed,
    ConfirmationNumber,
    CreatedAt,
    UpdatedAt,
    BudgetId,
}

#[derive(Iden, Clone, Copy)]
pub enum Accommodation {
    Table,
    Id,
    Name,
    Description,
    Type,
    PricePerNight,
    CostPerNight,
    MaxOccupancy,
    Address,
    Amenities,
    CheckInTime,
    CheckOutTime,
    Rating,
    ContactInfo,
    IsActive,
    IsTemplate,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum Activity {
    Table,
    Id,
    Name,
    Description,
    Category,
    BasePrice,
    BaseCost,
    Duration,
    MaxCapacity,
    Location,
    TransportRequired,
    TransportIncluded,
    EquipmentProvided,
    Requirements,
    IsActive,
    IsTemplate,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum FoodItem {
    Table,
    Id,
    Name,
    Description,
    Category,
    BasePrice,
    BaseCost,
    ServingSize,
    GuestsPerUnit,
    MaxUnits,
    Allergens,
    DietaryInfo,
    IsActive,
    IsTemplate,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum Menu {
    Table,
    Id,
    Name,
    Description,
    Type,
    PricePerPerson,
    CostPerPerson,
    MinPeople,
    MaxPeople,
    Restaurant,
    PreparationTime,
    IsActive,
    IsTemplate,
    Version,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum RelMenuIncludedFoodItems {
    #[iden = "rel_menu__included_food_items"]
    Table,
    MenuId,
    IncludedFoodItemsId,
}

#[derive(Iden, Clone, Copy)]
pub enum MenuItem {
    Table,
    Id,
    Name,
    Description,
    Category,
    Price,
    Cost,
    Allergens,
    DietaryInfo,
    PreparationTime,
    IsActive,
    CreatedAt,
    UpdatedAt,
    MenuId,
}

#[derive(Iden, Clone, Copy)]
pub enum Transport {
    Table,
    Id,
    Name,
    Description,
    VehicleType,
    Capacity,
    PricePerHour,
    PricePerKm,
    CostPerHour,
    CostPerKm,
    IncludesDriver,
    DriverCost,
    FuelType,
    ContactInfo,
    IsActive,
    IsTemplate,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum TransportAssignment {
    Table,
    Id,
    GuestCount,
    Duration,
    Distance,
    PickupLocation,
    DropoffLocation,
    PickupTime,
    ReturnTime,
    CalculatedPrice,
    CalculatedCost,
    Notes,
    CreatedAt,
    UpdatedAt,
    TransportId,
    BudgetId,
    ActivityId,
}

#[derive(Iden, Clone, Copy)]
pub enum Product {
    Table,
    Id,
    Name,
    Description,
    Category,
    Unit,
    PricePerUnit,
    MinOrderQuantity,
    MaxOrderQuantity,
    Supplier,
    SupplierContact,
    LeadTime,
    ShelfLife,
    StorageConditions,
    IsActive,
    LastUpdatedPrice,
    CreatedAt,
    UpdatedAt,
    CreatedById,
}

#[derive(Iden, Clone, Copy)]
pub enum Task {
    Table,
    Id,
    Title,
    Description,
    Type,
    Priority,
    Status,
    AssignedToRole,
    DueDate,
    DueTime,
    EstimatedDuration,
    ActualDuration,
    Location,
    Requirements,
    Notes,
    InvoiceUrl,
    AutoScheduled,
    IsRecurring,
    ParentTaskId,
    CompletedAt,
    StartedAt,
    Version,
    ConflictStatus,
    LastModifiedBy,
    CreatedAt,
    UpdatedAt,
    CreatedById,
    AssignedToId,
    WeeklyPlanId,
    RelatedBudgetId,
}

#[derive(Iden, Clone, Copy)]
pub enum TaskDependency {
    Table,
    Id,
    DependencyType,
    Notes,
    IsActive,
    CreatedAt,
    PrerequisiteTaskId,
    DependentTaskId,
}

#[derive(Iden, Clone, Copy)]
pub enum Need {
    Table,
    Id,
    Description,
    Quantity,
    Unit,
    Urgency,
    Status,
    RequestedDate,
    RequiredDate,
    FulfilledDate,
    EstimatedCost,
    ActualCost,
    Notes,
    CreatedAt,
    UpdatedAt,
    RequestedById,
    FulfilledById,
    ParentTaskId,
}

#[derive(Iden, Clone, Copy)]
pub enum CookingSchedule {
    Table,
    Id,
    EventDate,
    CookingTime,
    MealType,
    MenuName,
    GuestCount,
    SpecialInstructions,
    IsCompleted,
    CompletedAt,
    IngredientsReady,
    EstimatedDuration,
    ActualDuration,
    StartedAt,
    Version,
    ConflictStatus,
    LastModifiedBy,
    CreatedAt,
    UpdatedAt,
    RelatedTaskId,
    BudgetId,
}

#[derive(Iden, Clone, Copy)]
pub enum ProductRequirement {
    Table,
    Id,
    Quantity,
    Unit,
    Notes,
    EstimatedCost,
    ActualCost,
    IsPurchased,
    PurchasedBy,
    PurchasedAt,
    Version,
    ConflictStatus,
    CreatedAt,
    UpdatedAt,
    ProductId,
    RelatedTaskId,
    FoodItemId,
    ActivityId,
}

#[derive(Iden, Clone, Copy)]
pub enum CookingIngredient {
    Table,
    Id,
    OriginalQuantity,
    ModifiedQuantity,
    ModifiedUnit,
    Notes,
    AddedByUser,
    IsAvailable,
    AvailableAt,
    LastModifiedBy,
    Version,
    CreatedAt,
    UpdatedAt,
    ProductRequirementId,
    CookingScheduleId,
}

#[derive(Iden, Clone, Copy)]
pub enum ShoppingItem {
    Table,
    Id,
    ProductName,
    TotalQuantity,
    Unit,
    Category,
    BudgetIds,
    ClientNames,
    IsPurchased,
    PurchasedQuantity,
    WeekStart,
    WeekEnd,
    Notes,
    Supplier,
    SupplierContact,
    EstimatedCost,
    ActualCost,
    DeliveryDate,
    IsConsolidated,
    ConsolidatedAt,
    PurchasedAt,
    ConflictStatus,
    Version,
    CreatedAt,
    UpdatedAt,
    PurchasedById,
    WeeklyPlanId,
}

#[derive(Iden, Clone, Copy)]
pub enum Notification {
    Table,
    Id,
    Title,
    Message,
    Type,
    TargetRole,
    RelatedEntityType,
    RelatedEntityId,
    IsRead,
    IsGlobal,
    ActionRequired,
    ActionUrl,
    Priority,
    ExpiresAt,
    ReadAt,
    CreatedAt,
    CreatedById,
    TargetUserId,
}

#[derive(Iden, Clone, Copy)]
pub enum WorkflowTrigger {
    Table,
    Id,
    TriggerName,
    EntityType,
    TriggerCondition,
    ActionType,
    ActionConfiguration,
    IsActive,
    ExecutionOrder,
    LastExecuted,
    ExecutionCount,
    CreatedAt,
    UpdatedAt,
    CreatedById,
}

#[derive(Iden, Clone, Copy)]
pub enum SystemConfig {
    Table,
    Id,
    ConfigKey,
    ConfigValue,
    Description,
    IsActive,
    Category,
    IsSystem,
    DataType,
    ValidationRules,
    CreatedAt,
    UpdatedAt,
    CreatedById,
}

#[derive(Iden, Clone, Copy)]
pub enum AuditLog {
    Table,
    Id,
    EntityType,
    EntityId,
    Action,
    OldValue,
    NewValue,
    FieldName,
    UserId,
    UserRole,
    Timestamp,
    IpAddress,
    UserAgent,
    SessionId,
    AppUserId,
}

#[derive(Iden, Clone, Copy)]
pub enum ConflictResolution {
    Table,
    Id,
    EntityType,
    EntityId,
    FieldName,
    LocalValue,
    RemoteValue,
    ResolvedValue,
    ResolutionStrategy,
    IsResolved,
    ResolvedAt,
    ConflictDetectedAt,
    CreatedAt,
    ConflictUserId,
    ResolvedById,
}
